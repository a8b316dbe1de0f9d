// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Optimization barriers.

/// Forces the compiler to assume every reachable memory location may have been
/// read and written at this point.
///
/// Emits no instruction. Memory accesses on either side cannot be merged,
/// elided or moved across it, and values cached in registers must be reloaded
/// afterwards. It is **not** a hardware fence: other cores may still observe
/// stores out of order.
///
/// Only memory the compiler considers reachable from outside the function is
/// constrained: locations behind raw pointers, statics, and the contents of an
/// `UnsafeCell` (such as [`AccessCell`](crate::AccessCell)). A location behind
/// a `&mut T` or a `&T` without interior mutability is private to the
/// optimizer, and plain accesses to it may still be merged across the barrier.
/// Use [`read_once`](crate::read_once) / [`write_once`](crate::write_once) for
/// those.
///
/// # Example
///
/// ```
/// use bastion_once::barrier;
///
/// let mut status = 0u32;
/// let location: *mut u32 = &mut status;
///
/// // SAFETY: `location` points to a live local.
/// unsafe {
///     location.write(1);
///     barrier(); // the store of 1 is not folded into the store of 2
///     location.write(2);
/// }
/// assert_eq!(status, 2);
/// ```
#[inline(always)]
pub fn barrier() {
    #[cfg(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    ))]
    // SAFETY: an empty template touches no register, stack or flag. Leaving
    // out `nomem` is what makes it a memory clobber.
    unsafe {
        core::arch::asm!("", options(nostack, preserves_flags));
    }

    #[cfg(not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    )))]
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Returns `value` unchanged while making the optimizer believe it may have
/// been replaced by anything.
///
/// Stops constant propagation and value-range reasoning from crossing this
/// point. Best effort: it is a hint, not a guarantee.
///
/// # Example
///
/// ```
/// use bastion_once::hide_var;
///
/// let mask = hide_var(0xFFu8);
/// assert_eq!(mask, 0xFF);
/// ```
#[inline(always)]
pub fn hide_var<T>(value: T) -> T {
    core::hint::black_box(value)
}
