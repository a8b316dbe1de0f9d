// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-access reads and writes.
//!
//! Each call touches the location exactly once. Two calls that are distinct
//! operations in program order are never fused, elided or swapped by the
//! compiler. Ordinary accesses around them may still move, and no ordering is
//! implied for other cores: pair these with real fences or atomics when
//! another CPU is involved.
//!
//! Types that are 1, 2, 4 or 8 bytes wide and naturally aligned are moved in
//! one instruction. Everything else goes through a barrier-wrapped volatile
//! copy, which keeps the compiler ordering but may tear (see [`WidthClass`]). Use
//! [`read_once_native`] / [`write_once_native`] where tearing is not an
//! option: they refuse to build for fallback types.

use core::mem::MaybeUninit;

use bastion_assert::compiletime_assert;

use super::alias::WidthClass;
use super::error::AccessError;
use super::sized::SizedAccess;

/// Reads `*src` with a single access.
///
/// # Example
///
/// ```
/// use bastion_once::read_once;
///
/// let ticks = 42u64;
/// assert_eq!(read_once(&ticks), 42);
/// ```
#[inline(always)]
pub fn read_once<T: Copy>(src: &T) -> T {
    // SAFETY: a reference is valid and aligned for reads of `T`.
    unsafe { read_once_ptr(src) }
}

/// Writes `value` to `*dst` with a single access and returns it.
///
/// `value` is passed by value, so its padding bytes are whatever the compiler
/// left in them: only the fields are guaranteed to arrive. Use
/// [`SizedAccess::store`](crate::SizedAccess::store) to carry a prepared byte
/// image, padding included.
///
/// # Example
///
/// ```
/// use bastion_once::write_once;
///
/// let mut head = 0usize;
/// let written = write_once(&mut head, 7);
///
/// assert_eq!(written, 7);
/// assert_eq!(head, 7);
/// ```
#[inline(always)]
pub fn write_once<T: Copy>(dst: &mut T, value: T) -> T {
    // SAFETY: a mutable reference is valid and aligned for writes of `T`.
    unsafe { write_once_ptr(dst, value) }
}

/// Reads `*src` with a single access.
///
/// # Safety
///
/// `src` must be valid for reads of `T`, aligned for `T`, and point to an
/// initialized `T`.
#[inline(always)]
pub unsafe fn read_once_ptr<T: Copy>(src: *const T) -> T {
    let mut value = MaybeUninit::<T>::uninit();

    // SAFETY: `value` is a distinct, aligned local; `src` is upheld by the
    // caller.
    unsafe {
        SizedAccess::<T>::load(src, value.as_mut_ptr());
        value.assume_init()
    }
}

/// Writes `value` to `*dst` with a single access and returns it.
///
/// Padding bytes of `value` are not preserved, as with [`write_once`].
///
/// # Safety
///
/// `dst` must be valid for writes of `T` and aligned for `T`.
#[inline(always)]
pub unsafe fn write_once_ptr<T: Copy>(dst: *mut T, value: T) -> T {
    // SAFETY: `value` is a distinct, aligned local; `dst` is upheld by the
    // caller.
    unsafe { SizedAccess::<T>::store(dst, &value) };
    value
}

/// [`read_once_ptr`] that rejects null and misaligned locations instead of
/// invoking undefined behavior on them.
///
/// # Safety
///
/// A non-null, aligned `src` must still be valid for reads of an initialized
/// `T`.
///
/// # Example
///
/// ```
/// use bastion_once::{AccessError, try_read_once};
///
/// let value = 5u16;
///
/// assert_eq!(unsafe { try_read_once(&value) }, Ok(5));
/// assert_eq!(
///     unsafe { try_read_once::<u16>(core::ptr::null()) },
///     Err(AccessError::NullPointer)
/// );
/// ```
#[inline]
pub unsafe fn try_read_once<T: Copy>(src: *const T) -> Result<T, AccessError> {
    check_location(src)?;

    // SAFETY: checked non-null and aligned; validity is upheld by the caller.
    Ok(unsafe { read_once_ptr(src) })
}

/// [`write_once_ptr`] that rejects null and misaligned locations instead of
/// invoking undefined behavior on them.
///
/// # Safety
///
/// A non-null, aligned `dst` must still be valid for writes of `T`.
#[inline]
pub unsafe fn try_write_once<T: Copy>(dst: *mut T, value: T) -> Result<T, AccessError> {
    check_location(dst.cast_const())?;

    // SAFETY: checked non-null and aligned; validity is upheld by the caller.
    Ok(unsafe { write_once_ptr(dst, value) })
}

/// [`read_once`] restricted to types moved in a single instruction.
///
/// Fails to build when `T` is on the fallback tier.
///
/// # Example
///
/// ```
/// use bastion_once::read_once_native;
///
/// let flags = 0b1010u8;
/// assert_eq!(read_once_native(&flags), 0b1010);
/// ```
///
/// A three-byte array has no single-instruction access:
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_once::read_once_native;
///
/// let rgb = [0u8; 3];
/// let _ = read_once_native(&rgb);
/// ```
#[inline(always)]
pub fn read_once_native<T: Copy>(src: &T) -> T {
    compiletime_assert!(
        WidthClass::of::<T>().is_native(),
        "read_once_native: type cannot be read in a single instruction"
    );
    read_once(src)
}

/// [`write_once`] restricted to types moved in a single instruction.
///
/// Fails to build when `T` is on the fallback tier.
///
/// # Example
///
/// ```
/// use bastion_once::write_once_native;
///
/// let mut seq = 0u32;
/// write_once_native(&mut seq, 3);
/// assert_eq!(seq, 3);
/// ```
///
/// Nor does a pair of `u32`, which is only four-byte aligned:
///
#[cfg_attr(bastion_checked, doc = "```compile_fail,E0080")]
#[cfg_attr(not(bastion_checked), doc = "```")]
/// use bastion_once::write_once_native;
///
/// let mut span = (0u32, 0u32);
/// write_once_native(&mut span, (1, 2));
/// ```
#[inline(always)]
pub fn write_once_native<T: Copy>(dst: &mut T, value: T) -> T {
    compiletime_assert!(
        WidthClass::of::<T>().is_native(),
        "write_once_native: type cannot be written in a single instruction"
    );
    write_once(dst, value)
}

#[inline(always)]
fn check_location<T>(location: *const T) -> Result<(), AccessError> {
    if location.is_null() {
        return Err(AccessError::NullPointer);
    }

    if !location.is_aligned() {
        return Err(AccessError::Misaligned {
            address: location.addr(),
            align: align_of::<T>(),
        });
    }

    Ok(())
}

/// Reads a place with [`read_once`](crate::read_once).
///
/// # Example
///
/// ```
/// use bastion_once::read_once;
///
/// struct Ring {
///     head: u32,
/// }
///
/// let ring = Ring { head: 9 };
/// assert_eq!(read_once!(ring.head), 9);
/// ```
#[macro_export]
macro_rules! read_once {
    ($place:expr $(,)?) => {
        $crate::read_once(&$place)
    };
}

/// Writes a place with [`write_once`](crate::write_once), evaluating the value
/// first so it may read the same place.
///
/// # Example
///
/// ```
/// use bastion_once::write_once;
///
/// struct Ring {
///     tail: u32,
/// }
///
/// let mut ring = Ring { tail: 1 };
/// write_once!(ring.tail, ring.tail + 1);
/// assert_eq!(ring.tail, 2);
/// ```
#[macro_export]
macro_rules! write_once {
    ($place:expr, $value:expr $(,)?) => {{
        let value = $value;
        $crate::write_once(&mut $place, value)
    }};
}
