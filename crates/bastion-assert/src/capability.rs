// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Compiler capability flags and the assertion profile selected from them.
//!
//! Both are decided by the build script of this crate and frozen into
//! constants, so every consumer agrees on the active profile.

/// Compiler capabilities detected at build-configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The crate was built with `opt-level` other than `0`.
    pub optimizing: bool,
    /// The compiler can evaluate a condition as a constant without running it
    /// (inline `const { .. }` blocks).
    pub const_eval: bool,
    /// A failed constant evaluation aborts the build with its message.
    pub forced_error: bool,
}

impl Capabilities {
    /// Returns `true` if build-breaking assertions can be expressed at all.
    #[inline(always)]
    pub const fn supports_checked(&self) -> bool {
        self.const_eval && self.forced_error
    }
}

/// Capabilities of the compiler that built this crate.
pub const CAPABILITIES: Capabilities = Capabilities {
    optimizing: cfg!(bastion_optimizing),
    const_eval: cfg!(bastion_const_eval),
    forced_error: cfg!(bastion_forced_error),
};

/// Which implementation the assertion macros expand to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertProfile {
    /// A false condition fails the build and surfaces the message.
    Checked,
    /// Assertions are type-checked but never evaluated; they cost nothing and
    /// break nothing.
    Unchecked,
}

impl AssertProfile {
    /// Returns `true` for [`AssertProfile::Checked`].
    #[inline(always)]
    pub const fn is_checked(self) -> bool {
        matches!(self, AssertProfile::Checked)
    }
}

/// Assertion profile the macros of this crate were compiled with.
///
/// Selected by the build script, in order: the `BASTION_ASSERT_PROFILE`
/// environment variable (`checked` / `unchecked`), the `unchecked` cargo
/// feature, then [`AssertProfile::Checked`] whenever
/// [`Capabilities::supports_checked`] holds.
///
/// # Example
///
/// ```
/// use bastion_assert::{ASSERT_PROFILE, CAPABILITIES};
///
/// if ASSERT_PROFILE.is_checked() {
///     assert!(CAPABILITIES.supports_checked());
/// }
/// ```
pub const ASSERT_PROFILE: AssertProfile = if cfg!(bastion_checked) {
    AssertProfile::Checked
} else {
    AssertProfile::Unchecked
};
