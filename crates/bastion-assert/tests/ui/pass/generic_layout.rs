// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bastion_assert::{build_bug_on_zero, compiletime_assert};

#[repr(C)]
struct Frame {
    tag: u16,
    len: u16,
    crc: u32,
}

fn stride<T, const N: usize>() -> usize {
    compiletime_assert!(N > 0, "empty stride");
    compiletime_assert!(size_of::<T>() % align_of::<T>() == 0, "size not a multiple of align");
    size_of::<T>() * N + build_bug_on_zero!(N > 1024, "stride too long")
}

fn main() {
    assert_eq!(stride::<Frame, 4>(), 32);
    assert_eq!(stride::<u8, 1>(), 1);
}
