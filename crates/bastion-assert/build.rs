// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Build script selecting the assertion profile (checked / unchecked)

use std::process::Command;

/// First rustc minor release with inline `const { .. }` blocks.
const INLINE_CONST_MINOR: u32 = 79;
/// First rustc minor release where `panic!` in const context is a hard error.
const CONST_PANIC_MINOR: u32 = 57;

fn main() {
    // Declare custom cfgs to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(bastion_checked)");
    println!("cargo:rustc-check-cfg=cfg(bastion_optimizing)");
    println!("cargo:rustc-check-cfg=cfg(bastion_const_eval)");
    println!("cargo:rustc-check-cfg=cfg(bastion_forced_error)");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BASTION_ASSERT_PROFILE");

    let optimizing = std::env::var("OPT_LEVEL").is_ok_and(|level| level != "0");

    // An undetectable toolchain still had to understand edition 2024 to get here,
    // which postdates both features.
    let minor = rustc_minor_version();
    let const_eval = minor.is_none_or(|m| m >= INLINE_CONST_MINOR);
    let forced_error = minor.is_none_or(|m| m >= CONST_PANIC_MINOR);

    if optimizing {
        println!("cargo:rustc-cfg=bastion_optimizing");
    }
    if const_eval {
        println!("cargo:rustc-cfg=bastion_const_eval");
    }
    if forced_error {
        println!("cargo:rustc-cfg=bastion_forced_error");
    }

    let capable = const_eval && forced_error;

    let checked = match std::env::var("BASTION_ASSERT_PROFILE").as_deref() {
        Ok("checked") => capable,
        Ok("unchecked") => false,
        Ok(other) => {
            panic!("BASTION_ASSERT_PROFILE must be `checked` or `unchecked`, got `{other}`")
        }
        Err(_) => capable && std::env::var("CARGO_FEATURE_UNCHECKED").is_err(),
    };

    if checked {
        println!("cargo:rustc-cfg=bastion_checked");
    }

    // Read by dependents as DEP_BASTION_ASSERT_PROFILE
    let profile = if checked { "checked" } else { "unchecked" };
    println!("cargo:profile={profile}");
}

fn rustc_minor_version() -> Option<u32> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    let version = String::from_utf8(output.stdout).ok()?;

    // "rustc 1.85.0 (4d91de4e4 2025-02-17)"
    let mut parts = version.split_whitespace().nth(1)?.split('.');
    let major: u32 = parts.next()?.parse().ok()?;
    let minor: u32 = parts.next()?.parse().ok()?;

    if major > 1 {
        return Some(u32::MAX);
    }

    Some(minor)
}
