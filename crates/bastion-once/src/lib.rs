// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bastion-once
//!
//! Memory accesses the compiler performs exactly once.
//!
//! A single-access operation is never split, merged, repeated or elided by
//! the compiler, and two of them in program order stay in that order. This is
//! what code sharing memory with an interrupt or signal handler on the same
//! core needs, and what lock-free code needs underneath its fences.
//!
//! ## Tiers
//!
//! | Type                                    | Access                           |
//! |-----------------------------------------|----------------------------------|
//! | 1, 2, 4 or 8 bytes, naturally aligned   | one volatile load / store        |
//! | anything else                           | barrier, word-wise copy, barrier |
//!
//! The second tier keeps compiler ordering but may tear. Query it with
//! [`WidthClass::of`], or use the `_native` operations to make it a build
//! error.
//!
//! ## What this is not
//!
//! No fences are emitted and nothing here is atomic across cores. The caller
//! synchronizes the location; these primitives only remove compiler-made
//! hazards.
//!
//! ## Example
//!
//! ```
//! use bastion_once::{AccessCell, barrier, read_once, write_once};
//!
//! let mut seq = 0u32;
//! write_once!(seq, seq + 1);
//! barrier();
//! assert_eq!(read_once!(seq), 1);
//!
//! let irq_pending = AccessCell::new(true);
//! while irq_pending.get() {
//!     irq_pending.set(false);
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod alias;
mod barrier;
mod cell;
mod error;
mod once;
mod sized;

pub use alias::{AliasWord, WidthClass};
pub use barrier::{barrier, hide_var};
pub use cell::AccessCell;
pub use error::AccessError;
pub use once::{
    read_once, read_once_native, read_once_ptr, try_read_once, try_write_once, write_once,
    write_once_native, write_once_ptr,
};
pub use sized::SizedAccess;
