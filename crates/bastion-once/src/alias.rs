// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Alias views: the integer widths a value may be reinterpreted as so that it
//! moves through memory in one machine access.
//!
//! Views are always `MaybeUninit<W>`, never `W` itself: the bytes behind a
//! value may include padding, and only `MaybeUninit` may carry uninitialized
//! bytes without undefined behavior.

use core::mem::MaybeUninit;

use bastion_assert::const_assert;

mod private {
    pub trait Sealed {}
}

/// An unsigned integer type a naturally aligned region of the same width can
/// be viewed as for a single volatile access.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait AliasWord: Copy + private::Sealed {
    /// Width of the view in bytes.
    const WIDTH: usize;

    /// Performs one volatile load of [`Self::WIDTH`] bytes.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `WIDTH` bytes and aligned to `WIDTH`.
    unsafe fn load_volatile(src: *const u8) -> MaybeUninit<Self>;

    /// Performs one volatile store of [`Self::WIDTH`] bytes.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `WIDTH` bytes and aligned to `WIDTH`.
    unsafe fn store_volatile(dst: *mut u8, word: MaybeUninit<Self>);
}

/// Implements the sealed [`AliasWord`] trait for naturally aligned integers.
macro_rules! impl_alias_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl AliasWord for $ty {
                const WIDTH: usize = size_of::<$ty>();

                #[inline(always)]
                unsafe fn load_volatile(src: *const u8) -> MaybeUninit<Self> {
                    // SAFETY: upheld by the caller.
                    unsafe { core::ptr::read_volatile(src.cast::<MaybeUninit<$ty>>()) }
                }

                #[inline(always)]
                unsafe fn store_volatile(dst: *mut u8, word: MaybeUninit<Self>) {
                    // SAFETY: upheld by the caller.
                    unsafe { core::ptr::write_volatile(dst.cast::<MaybeUninit<$ty>>(), word) }
                }
            }

            const_assert!(
                align_of::<$ty>() == size_of::<$ty>() || size_of::<$ty>() > size_of::<usize>(),
                "alias word is not naturally aligned"
            );
        )*
    };
}

impl_alias_word!(u8, u16, u32, u64);

/// How a type is moved by a single-access operation.
///
/// # Example
///
/// ```
/// use bastion_once::WidthClass;
///
/// assert_eq!(WidthClass::of::<u32>(), WidthClass::Native(4));
/// assert_eq!(WidthClass::of::<[u8; 3]>(), WidthClass::Fallback(3));
///
/// // Two bytes wide but only byte aligned: no single aligned access exists.
/// assert_eq!(WidthClass::of::<[u8; 2]>(), WidthClass::Fallback(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Moved through the alias word of this width with one load or store.
    Native(usize),
    /// Moved by a barrier-wrapped volatile copy of this many bytes, one alias
    /// word at a time. The compiler will not fuse, elide or reorder it, but
    /// the copy is split into several instructions and may tear.
    Fallback(usize),
}

impl WidthClass {
    /// Classifies `T`.
    ///
    /// A type is native when it is 1, 2, 4 or 8 bytes wide **and** aligned to
    /// its own width; anything else falls back to the word-wise copy.
    #[inline(always)]
    pub const fn of<T>() -> Self {
        let size = size_of::<T>();
        let natural = align_of::<T>() == size;

        match size {
            1 | 2 | 4 | 8 if natural => WidthClass::Native(size),
            _ => WidthClass::Fallback(size),
        }
    }

    /// Width of the access in bytes.
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            WidthClass::Native(width) | WidthClass::Fallback(width) => width,
        }
    }

    /// Returns `true` for [`WidthClass::Native`].
    #[inline(always)]
    pub const fn is_native(self) -> bool {
        matches!(self, WidthClass::Native(_))
    }
}
