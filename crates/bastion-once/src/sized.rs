// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Width-dispatched access between a shared location and a private payload.

use core::marker::PhantomData;
use core::mem::MaybeUninit;

use super::alias::{AliasWord, WidthClass};
use super::barrier::barrier;

/// Moves one `T` between a location and a payload buffer, touching the
/// location exactly once.
///
/// The dispatch on [`SizedAccess::CLASS`] is resolved per type at compile
/// time: native types compile to one load or store through their
/// [`AliasWord`], everything else to a run of volatile loads or stores in the
/// widest alias word the alignment of `T` allows, bracketed by two
/// [`barrier`]s. Being volatile, each chunk survives even when the location is
/// a `&T` / `&mut T` the optimizer assumes nobody else observes.
///
/// With the `log` feature, every fallback access emits a `log::warn!`. That
/// is a diagnostic aid: logging from an interrupt or signal handler is rarely
/// safe, so leave the feature off in production builds.
///
/// # Example
///
/// ```
/// use core::mem::MaybeUninit;
/// use bastion_once::{SizedAccess, WidthClass};
///
/// let shared = 0xDEAD_BEEFu32;
/// let mut payload = MaybeUninit::<u32>::uninit();
///
/// assert_eq!(SizedAccess::<u32>::CLASS, WidthClass::Native(4));
///
/// // SAFETY: both pointers are valid, aligned and distinct.
/// unsafe { SizedAccess::<u32>::load(&shared, payload.as_mut_ptr()) };
/// assert_eq!(unsafe { payload.assume_init() }, 0xDEAD_BEEF);
/// ```
pub struct SizedAccess<T>(PhantomData<T>);

impl<T> SizedAccess<T> {
    /// How `T` is accessed.
    pub const CLASS: WidthClass = WidthClass::of::<T>();

    /// Copies the `T` at `src` into `dst`, reading `src` once.
    ///
    /// Padding bytes are carried over as they are.
    ///
    /// # Safety
    ///
    /// - `src` must be valid for reads and `dst` valid for writes of `T`
    /// - both must be aligned for `T`
    /// - the two regions must not overlap
    #[inline(always)]
    pub unsafe fn load(src: *const T, dst: *mut T) {
        let src = src.cast::<u8>();
        let dst = dst.cast::<u8>();

        // SAFETY: a native class guarantees the width and a natural alignment
        // matching the alias word; the rest is upheld by the caller.
        unsafe {
            match Self::CLASS {
                WidthClass::Native(1) => load_word::<u8>(src, dst),
                WidthClass::Native(2) => load_word::<u16>(src, dst),
                WidthClass::Native(4) => load_word::<u32>(src, dst),
                WidthClass::Native(8) => load_word::<u64>(src, dst),
                class => store_fenced::<T>(dst, src, class.width()),
            }
        }
    }

    /// Copies the `T` at `src` into `dst`, writing `dst` once.
    ///
    /// Padding bytes are carried over as they are.
    ///
    /// # Safety
    ///
    /// Same contract as [`SizedAccess::load`].
    #[inline(always)]
    pub unsafe fn store(dst: *mut T, src: *const T) {
        let src = src.cast::<u8>();
        let dst = dst.cast::<u8>();

        // SAFETY: see `load`.
        unsafe {
            match Self::CLASS {
                WidthClass::Native(1) => store_word::<u8>(dst, src),
                WidthClass::Native(2) => store_word::<u16>(dst, src),
                WidthClass::Native(4) => store_word::<u32>(dst, src),
                WidthClass::Native(8) => store_word::<u64>(dst, src),
                class => load_fenced::<T>(src, dst, class.width()),
            }
        }
    }
}

#[inline(always)]
unsafe fn load_word<W: AliasWord>(src: *const u8, dst: *mut u8) {
    unsafe {
        let word = W::load_volatile(src);
        dst.cast::<MaybeUninit<W>>().write(word);
    }
}

#[inline(always)]
unsafe fn store_word<W: AliasWord>(dst: *mut u8, src: *const u8) {
    unsafe {
        let word = src.cast::<MaybeUninit<W>>().read();
        W::store_volatile(dst, word);
    }
}

/// Widest alias word a `T`-aligned location can be split into.
pub(crate) const fn chunk_width<T>() -> usize {
    let align = align_of::<T>();

    if align >= 8 {
        8
    } else {
        align
    }
}

#[inline(always)]
unsafe fn load_fenced<T>(src: *const u8, dst: *mut u8, len: usize) {
    report_fallback::<T>(len);

    barrier();
    // SAFETY: chunks never exceed the alignment of `T`; the rest is upheld by
    // the caller of `load`.
    unsafe {
        match chunk_width::<T>() {
            8 => load_chunks::<u64>(src, dst, len),
            4 => load_chunks::<u32>(src, dst, len),
            2 => load_chunks::<u16>(src, dst, len),
            _ => load_chunks::<u8>(src, dst, len),
        }
    }
    barrier();
}

#[inline(always)]
unsafe fn store_fenced<T>(dst: *mut u8, src: *const u8, len: usize) {
    report_fallback::<T>(len);

    barrier();
    // SAFETY: see `load_fenced`.
    unsafe {
        match chunk_width::<T>() {
            8 => store_chunks::<u64>(dst, src, len),
            4 => store_chunks::<u32>(dst, src, len),
            2 => store_chunks::<u16>(dst, src, len),
            _ => store_chunks::<u8>(dst, src, len),
        }
    }
    barrier();
}

#[inline(always)]
unsafe fn load_chunks<W: AliasWord>(src: *const u8, dst: *mut u8, len: usize) {
    let mut offset = 0;

    unsafe {
        while offset + W::WIDTH <= len {
            load_word::<W>(src.add(offset), dst.add(offset));
            offset += W::WIDTH;
        }
        while offset < len {
            load_word::<u8>(src.add(offset), dst.add(offset));
            offset += 1;
        }
    }
}

#[inline(always)]
unsafe fn store_chunks<W: AliasWord>(dst: *mut u8, src: *const u8, len: usize) {
    let mut offset = 0;

    unsafe {
        while offset + W::WIDTH <= len {
            store_word::<W>(dst.add(offset), src.add(offset));
            offset += W::WIDTH;
        }
        while offset < len {
            store_word::<u8>(dst.add(offset), src.add(offset));
            offset += 1;
        }
    }
}

#[inline(always)]
fn report_fallback<T>(_len: usize) {
    #[cfg(feature = "log")]
    log::warn!(
        "bastion-once: {} ({} bytes) is not accessed in a single instruction",
        core::any::type_name::<T>(),
        _len
    );
}
