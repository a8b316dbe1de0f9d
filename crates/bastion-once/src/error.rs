// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bastion-once.

use thiserror::Error;

/// Rejected access request of [`try_read_once`](crate::try_read_once) or
/// [`try_write_once`](crate::try_write_once).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The location is a null pointer.
    #[error("access location is null")]
    NullPointer,

    /// The location is not aligned for the accessed type.
    #[error("access location {address:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// Address of the location.
        address: usize,
        /// Alignment required by the accessed type.
        align: usize,
    },
}
