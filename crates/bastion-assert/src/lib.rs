// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bastion-assert
//!
//! Assertions that abort compilation instead of the running program.
//!
//! - [`compiletime_assert!`]: statement form, may mention generic parameters
//! - [`const_assert!`]: module-level form
//! - [`build_bug_on_zero!`]: expression form, evaluates to `0usize`
//! - [`is_constexpr!`] / [`const_true!`]: compile-time constant detection
//!
//! ## Build profiles
//!
//! The build script picks one of two profiles, reported by [`ASSERT_PROFILE`]:
//!
//! - **checked**: a false condition is a build error carrying its message
//! - **unchecked**: conditions are type-checked and discarded
//!
//! Set `BASTION_ASSERT_PROFILE=unchecked` (or enable the `unchecked` feature)
//! to opt into the unchecked profile. It never turns into a runtime check.
//!
//! ```
//! use bastion_assert::{compiletime_assert, const_assert, is_constexpr};
//!
//! #[repr(C)]
//! struct Header {
//!     magic: u32,
//!     len: u32,
//! }
//!
//! const_assert!(size_of::<Header>() == 8, "Header layout changed");
//!
//! let runtime_len = std::env::args().count();
//! compiletime_assert!(is_constexpr!(2 + 2), "literals fold");
//! assert!(!is_constexpr!(runtime_len + 1));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod assert;
mod capability;

pub use bastion_assert_macros::{const_true, is_constexpr};
pub use capability::{ASSERT_PROFILE, AssertProfile, CAPABILITIES, Capabilities};
