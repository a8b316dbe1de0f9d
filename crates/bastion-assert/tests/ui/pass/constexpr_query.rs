// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bastion_assert::{const_assert, const_true, is_constexpr};

const LANES: usize = 4;
static LIMIT: usize = 8;

const_assert!(is_constexpr!(LANES * 2 + 1));
const_assert!(!is_constexpr!(lanes()));
const_assert!(is_constexpr!(LIMIT * LANES));
const_assert!(!const_true!(LANES.is_power_of_two()));

fn lanes() -> usize {
    panic!("never called by the detector")
}

fn main() {
    let runtime = std::env::args().count();
    assert!(!is_constexpr!(runtime));
    assert!(const_true!(LANES == 4));
}
