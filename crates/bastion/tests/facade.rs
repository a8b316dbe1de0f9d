// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bastion::{
    AccessCell, WidthClass, barrier, build_bug_on_zero, compiletime_assert, const_assert,
    const_true, hide_var, is_constexpr, read_once, write_once,
};
use proptest::prelude::*;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Doorbell {
    seq: u32,
    len: u16,
    kind: u8,
    flags: u8,
}

const_assert!(size_of::<Doorbell>() == 8);

const DOORBELL_SLOTS: usize = 4 + build_bug_on_zero!(
    size_of::<Doorbell>() % 4 != 0,
    "doorbell must be word sized"
);

fn ring_doorbell(slot: &mut Doorbell, len: u16) -> u32 {
    compiletime_assert!(
        align_of::<Doorbell>() == 4,
        "doorbell alignment changed"
    );

    let seq = read_once!(slot.seq).wrapping_add(1);
    write_once!(slot.len, len);
    barrier();
    write_once!(slot.seq, seq)
}

#[test]
fn facade_reexports_once_and_assert() {
    let mut slots = [Doorbell {
        seq: 0,
        len: 0,
        kind: 0,
        flags: 0,
    }; DOORBELL_SLOTS];

    assert_eq!(ring_doorbell(&mut slots[2], 64), 1);
    assert_eq!(ring_doorbell(&mut slots[2], 32), 2);
    assert_eq!(read_once(&slots[2]).len, 32);
    assert_eq!(read_once(&slots[0]).seq, 0);
}

#[test]
fn facade_module_paths() {
    let cell = bastion::once::AccessCell::new(1u8);
    cell.set(2);

    assert_eq!(cell.get(), 2);
    assert_eq!(
        bastion::ASSERT_PROFILE,
        bastion::assert::ASSERT_PROFILE
    );
}

#[test]
fn facade_constexpr_queries() {
    const LANES: usize = 4;
    let runtime = hide_var(LANES);

    assert!(is_constexpr!(LANES * 2));
    assert!(!is_constexpr!(runtime * 2));
    assert!(const_true!(LANES > 2));
    assert!(!const_true!(runtime > 2));
    assert_eq!(WidthClass::of::<Doorbell>(), WidthClass::Fallback(8));
}

proptest! {
    #[test]
    fn facade_cell_round_trip(value in any::<u32>()) {
        let cell = AccessCell::new(0u32);
        cell.set(value);

        prop_assert_eq!(cell.get(), value);
        prop_assert_eq!(write_once(&mut 0u32, value), value);
    }
}
