// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unmangled functions whose assembly is inspected by `tests/codegen.rs`.
//!
//! Every function takes its location as the first argument, so on x86_64 System V
//! each access to it shows up as a `(%rdi)` operand.

#![no_std]

use bastion_once::{barrier, read_once, write_once};

/// Two plain reads of the same location. Expected to fold into one load.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_plain_read_twice(location: &u32) -> u32 {
    (*location).wrapping_add(*location)
}

/// Two single-access reads of the same location. Expected to stay two loads.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_read_once_twice(location: &u32) -> u32 {
    read_once(location).wrapping_add(read_once(location))
}

/// Two plain stores. Expected to fold into the last one.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_plain_store_twice(location: &mut u32) {
    *location = 1;
    *location = 2;
}

/// Two plain stores through a raw pointer separated by a barrier. Expected to
/// stay two stores.
///
/// # Safety
///
/// `location` must be valid for writes of `u32` and aligned.
#[unsafe(no_mangle)]
#[inline(never)]
pub unsafe fn bastion_emit_barrier_between_stores(location: *mut u32) {
    unsafe {
        location.write(1);
        barrier();
        location.write(2);
    }
}

/// Two single-access stores. Expected to stay two stores.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_write_once_twice(location: &mut u32) {
    write_once(location, 1);
    write_once(location, 2);
}

/// Two single-access reads of a fallback-tier type. Expected to stay six
/// loads, three per read.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_fallback_read_twice(location: &[u32; 3]) -> u32 {
    let first = read_once(location);
    let second = read_once(location);

    first
        .iter()
        .chain(second.iter())
        .fold(0, |sum, word| sum.wrapping_add(*word))
}

/// Two single-access writes of a fallback-tier type. Expected to stay six
/// stores, three per write.
#[unsafe(no_mangle)]
#[inline(never)]
pub fn bastion_emit_fallback_write_twice(location: &mut [u32; 3]) {
    write_once(location, [1, 1, 1]);
    write_once(location, [2, 2, 2]);
}
