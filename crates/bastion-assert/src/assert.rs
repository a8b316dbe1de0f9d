// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-breaking assertion macros.
//!
//! Every macro exists twice: the checked definition hands the condition to the
//! constant evaluator, the unchecked one only type-checks it inside code that
//! never runs. The build script decides which pair is compiled in, so callers
//! inherit the profile of this crate, not their own.

/// Breaks the build with `msg` if `cond` is false.
///
/// `cond` must be a constant expression. It may mention generic parameters of
/// the enclosing function (`size_of::<T>()`), in which case the check fires
/// when the function is instantiated with an offending type.
///
/// Under the unchecked profile the condition is type-checked only; it is never
/// evaluated, neither at compile time nor at runtime.
///
/// Errors raised while monomorphizing are only reported by a full build, not
/// by `cargo check`.
///
/// # Example
///
/// ```
/// use bastion_assert::compiletime_assert;
///
/// fn word_sized<T>() -> usize {
///     compiletime_assert!(size_of::<T>() <= 8, "wider than a machine word");
///     size_of::<T>()
/// }
///
/// compiletime_assert!(2 + 2 == 4, "arithmetic is broken");
/// assert_eq!(word_sized::<u32>(), 4);
/// ```
///
/// A false condition fails the build, reporting the message:
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_assert::compiletime_assert;
///
/// compiletime_assert!(2 + 2 == 5, "arithmetic is broken");
/// ```
///
/// Inside a generic function it fails once instantiated with an offending type:
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_assert::compiletime_assert;
///
/// fn word_sized<T>() -> usize {
///     compiletime_assert!(size_of::<T>() <= 8, "wider than a machine word");
///     size_of::<T>()
/// }
///
/// word_sized::<[u64; 2]>();
/// ```
#[cfg(bastion_checked)]
#[macro_export]
macro_rules! compiletime_assert {
    ($cond:expr, $msg:literal $(,)?) => {
        const { ::core::assert!($cond, $msg) }
    };
}

/// Breaks the build with `msg` if `cond` is false.
///
/// This crate was built with the unchecked profile: the condition is
/// type-checked and discarded.
#[cfg(not(bastion_checked))]
#[macro_export]
macro_rules! compiletime_assert {
    ($cond:expr, $msg:literal $(,)?) => {
        if false {
            let _: bool = $cond;
            let _: &str = $msg;
        }
    };
}

/// Module-level form of [`compiletime_assert!`].
///
/// Expands to an anonymous `const _` item, so any number of them may share a
/// module. The condition cannot mention generic parameters.
///
/// # Example
///
/// ```
/// use bastion_assert::const_assert;
///
/// const_assert!(size_of::<u64>() == 8);
/// const_assert!(size_of::<usize>() >= size_of::<u16>(), "unsupported target");
/// ```
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_assert::const_assert;
///
/// const_assert!(false);
///
/// fn main() {}
/// ```
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_assert::const_assert;
///
/// const_assert!(size_of::<u32>() == 8, "u32 is not eight bytes");
///
/// fn main() {}
/// ```
#[cfg(bastion_checked)]
#[macro_export]
macro_rules! const_assert {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}

/// Module-level form of [`compiletime_assert!`] (unchecked profile).
#[cfg(not(bastion_checked))]
#[macro_export]
macro_rules! const_assert {
    ($cond:expr $(,)?) => {
        const _: fn() = || {
            let _: bool = $cond;
        };
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: fn() = || {
            let _: bool = $cond;
            let _: &str = $msg;
        };
    };
}

/// Evaluates to `0usize`, breaking the build with `msg` if `cond` is **true**.
///
/// Useful where only an expression fits, e.g. folded into an array length or
/// a constant.
///
/// # Example
///
/// ```
/// use bastion_assert::build_bug_on_zero;
///
/// const PADDED: usize = 16 + build_bug_on_zero!(16 % 8 != 0, "not a multiple of 8");
/// assert_eq!(PADDED, 16);
/// ```
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_assert::build_bug_on_zero;
///
/// const PADDED: usize = 12 + build_bug_on_zero!(12 % 8 != 0, "not a multiple of 8");
/// assert_eq!(PADDED, 12);
/// ```
#[cfg(bastion_checked)]
#[macro_export]
macro_rules! build_bug_on_zero {
    ($cond:expr, $msg:literal $(,)?) => {
        const {
            ::core::assert!(!($cond), $msg);
            0usize
        }
    };
}

/// Evaluates to `0usize` (unchecked profile: `cond` is never evaluated).
#[cfg(not(bastion_checked))]
#[macro_export]
macro_rules! build_bug_on_zero {
    ($cond:expr, $msg:literal $(,)?) => {{
        if false {
            let _: bool = $cond;
            let _: &str = $msg;
        }
        0usize
    }};
}
