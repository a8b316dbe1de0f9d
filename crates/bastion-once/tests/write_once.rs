// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bastion_once::{read_once, write_once, write_once_ptr};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct Descriptor {
    addr: u64,
    len: u32,
    flags: u16,
}

fn descriptor() -> impl Strategy<Value = Descriptor> {
    (any::<u64>(), any::<u32>(), any::<u16>()).prop_map(|(addr, len, flags)| Descriptor {
        addr,
        len,
        flags,
    })
}

macro_rules! write_once_width_tests {
    ($($ty:ty),* $(,)?) => {
        $(
            pastey::paste! {
                proptest! {
                    #[test]
                    fn [<write_once_overwrites_ $ty>](old in any::<$ty>(), new in any::<$ty>()) {
                        let mut location = old;

                        let written = write_once(&mut location, new);

                        prop_assert_eq!(written, new);
                        prop_assert_eq!(location, new);
                    }
                }
            }
        )*
    };
}

write_once_width_tests!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, u128);

proptest! {
    #[test]
    fn write_once_descriptor(old in descriptor(), new in descriptor()) {
        let mut location = old;

        write_once(&mut location, new);

        prop_assert_eq!(read_once(&location), new);
    }

    #[test]
    fn write_once_leaves_neighbours_untouched(
        fill in any::<u16>(),
        value in any::<u16>(),
        index in 0..8usize
    ) {
        let mut ring = [fill; 8];

        write_once(&mut ring[index], value);

        for (position, slot) in ring.iter().enumerate() {
            let expected = if position == index { value } else { fill };
            prop_assert_eq!(*slot, expected);
        }
    }

    #[test]
    fn write_once_ptr_into_vec_tail(values in prop::collection::vec(any::<i32>(), 1..32), last in any::<i32>()) {
        let mut values = values;
        let tail = values.len() - 1;

        // SAFETY: `tail` is in bounds of a live vector.
        unsafe { write_once_ptr(values.as_mut_ptr().add(tail), last) };

        prop_assert_eq!(values[tail], last);
    }
}

#[test]
fn write_once_macro_places() {
    let mut table = [Descriptor {
        addr: 0,
        len: 0,
        flags: 0,
    }; 2];

    write_once!(table[1].len, 512);
    write_once!(table[1].flags, table[1].flags | 0x1);
    write_once!(table[0], table[1]);

    assert_eq!(table[0].len, 512);
    assert_eq!(table[0].flags, 1);
    assert_eq!(read_once!(table[0].addr), 0);
}
