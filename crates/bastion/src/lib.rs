// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Memory accesses the compiler cannot split, merge or elide.</em></p>
//!
//! ---
//!
//! Bastion is a `no_std` toolkit for code that shares memory with something
//! the compiler cannot see: an interrupt handler, a signal handler, a device,
//! or another core behind a fence.
//!
//! # Features
//!
//! - **Single-access reads and writes**: `read_once` / `write_once` touch the
//!   location exactly once, in program order
//! - **Optimization barrier**: `barrier()` makes the compiler forget everything
//!   it knows about memory, at zero instruction cost
//! - **Value hiding**: `hide_var` stops constant propagation through a value
//! - **Build-breaking assertions**: `compiletime_assert!`, `const_assert!` and
//!   `build_bug_on_zero!` reject bad layouts at build time, even in generics
//! - **Constant detection**: `is_constexpr!` and `const_true!` classify an
//!   expression without evaluating it
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! bastion = { version = "0.1.0-rc.1" }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use bastion::{AccessCell, barrier, compiletime_assert, read_once, write_once};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy)]
//! struct Ring {
//!     head: u32,
//!     tail: u32,
//! }
//!
//! fn push(ring: &mut Ring, slots: &mut [u8; 8], byte: u8) {
//!     compiletime_assert!(size_of::<Ring>() == 8, "Ring layout changed");
//!
//!     let tail = read_once!(ring.tail);
//!     slots[tail as usize % 8] = byte;
//!     barrier(); // the slot is written before the index is published
//!     write_once!(ring.tail, tail + 1);
//! }
//!
//! let mut ring = Ring { head: 0, tail: 0 };
//! let mut slots = [0u8; 8];
//! push(&mut ring, &mut slots, 0xAB);
//!
//! assert_eq!(read_once!(ring.tail), 1);
//! assert_eq!(slots[0], 0xAB);
//!
//! let irq_seen = AccessCell::new(false);
//! irq_seen.set(true);
//! assert!(irq_seen.get());
//! ```
//!
//! # Access tiers
//!
//! | Type | Access |
//! |------|--------|
//! | 1, 2, 4 or 8 bytes, naturally aligned | one load / store |
//! | anything else | barrier, volatile word-wise copy, barrier (may tear) |
//!
//! Use `read_once_native` / `write_once_native` to turn the second tier into a
//! build error, or enable the `log` feature to get a warning on every such
//! access.
//!
//! # Assertion profiles
//!
//! | Profile | Effect of a false condition |
//! |---------|-----------------------------|
//! | checked (default) | build error carrying the message |
//! | unchecked | none; the condition is still type checked |
//!
//! Select the unchecked profile with the `unchecked` feature or with
//! `BASTION_ASSERT_PROFILE=unchecked` at build time. [`ASSERT_PROFILE`]
//! reports the active one.
//!
//! # Not included
//!
//! No hardware fences and no atomics. Cross-core ordering is the caller's
//! responsibility.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use bastion_assert as assert;
pub use bastion_once as once;

pub use bastion_assert::{
    ASSERT_PROFILE, AssertProfile, build_bug_on_zero, compiletime_assert, const_assert,
    const_true, is_constexpr,
};
pub use bastion_once::{
    AccessCell, AccessError, WidthClass, barrier, hide_var, read_once, read_once_native,
    read_once_ptr, try_read_once, try_write_once, write_once, write_once_native, write_once_ptr,
};
