// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Build script mirroring the assertion profile of bastion-assert

fn main() {
    println!("cargo:rustc-check-cfg=cfg(bastion_checked)");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=DEP_BASTION_ASSERT_PROFILE");

    // `_native` operations reject fallback types only when bastion-assert
    // compiled its assertions as checked.
    if std::env::var("DEP_BASTION_ASSERT_PROFILE").as_deref() == Ok("checked") {
        println!("cargo:rustc-cfg=bastion_checked");
    }
}
