// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Interior-mutable cell with single-access semantics.

use core::cell::UnsafeCell;
use core::fmt;

use super::once::{read_once_ptr, write_once_ptr};

/// Like [`core::cell::Cell`], but every `get` and `set` is a single access.
///
/// Meant for state shared between normal code and a handler interrupting it
/// on the same core: the handler's writes are always re-read, and the
/// program's writes are never merged or dropped.
///
/// `AccessCell` is not `Sync`. Wrapping it for use in a `static` is the
/// caller's promise that the location is synchronized externally (single
/// writer, interrupts masked, a lock held elsewhere).
///
/// # Example
///
/// ```
/// use bastion_once::AccessCell;
///
/// let pending = AccessCell::new(false);
///
/// pending.set(true);
/// assert!(pending.replace(false));
/// assert!(!pending.get());
/// ```
#[repr(transparent)]
pub struct AccessCell<T> {
    value: UnsafeCell<T>,
}

impl<T> AccessCell<T> {
    /// Creates a new cell containing `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
        }
    }

    /// Returns a raw pointer to the underlying value.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.value.get()
    }

    /// Returns a mutable reference to the underlying value.
    ///
    /// Exclusive access through `&mut self` needs no single-access guarantee.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consumes the cell, returning the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Copy> AccessCell<T> {
    /// Reads the value with a single access.
    #[inline(always)]
    pub fn get(&self) -> T {
        // SAFETY: `UnsafeCell` yields a valid, aligned pointer to an
        // initialized `T`, and `!Sync` keeps it on this thread.
        unsafe { read_once_ptr(self.value.get()) }
    }

    /// Writes the value with a single access.
    #[inline(always)]
    pub fn set(&self, value: T) {
        // SAFETY: see `get`.
        unsafe {
            write_once_ptr(self.value.get(), value);
        }
    }

    /// Writes `value` and returns the previous value.
    ///
    /// Two separate accesses, not an atomic exchange.
    #[inline(always)]
    pub fn replace(&self, value: T) -> T {
        let previous = self.get();
        self.set(value);
        previous
    }
}

impl<T: Copy + Default> Default for AccessCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for AccessCell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for AccessCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessCell")
            .field("value", &self.get())
            .finish()
    }
}
