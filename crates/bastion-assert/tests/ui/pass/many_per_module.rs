// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bastion_assert::{compiletime_assert, const_assert};

const_assert!(size_of::<u8>() == 1);
const_assert!(size_of::<u16>() == 2);
const_assert!(size_of::<u32>() == 4, "u32 is four bytes");
const_assert!(size_of::<u64>() == 8, "u64 is eight bytes");

mod nested {
    bastion_assert::const_assert!(align_of::<u8>() == 1);
    bastion_assert::const_assert!(align_of::<u8>() == 1);
}

fn main() {
    compiletime_assert!(true, "first");
    compiletime_assert!(true, "second");
    compiletime_assert!(1 < 2, "third");
}
