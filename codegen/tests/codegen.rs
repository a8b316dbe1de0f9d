// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counts the accesses each fixture compiles to.
//!
//! Builds this crate in release mode with `--emit asm`, which takes a while and
//! needs x86_64. Run with `cargo test -p bastion-codegen -- --ignored`.

#![cfg(target_arch = "x86_64")]

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

fn emit_asm() -> &'static str {
    static ASM: OnceLock<String> = OnceLock::new();

    ASM.get_or_init(build_asm)
}

fn build_asm() -> String {
    let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("codegen");

    let status = Command::new(env!("CARGO"))
        .args(["rustc", "--release", "--lib", "-p", "bastion-codegen"])
        .arg("--target-dir")
        .arg(&target_dir)
        .args(["--", "--emit", "asm", "-C", "codegen-units=1"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .status()
        .expect("Failed to spawn cargo rustc");
    assert!(status.success(), "cargo rustc failed: {status}");

    let asm = find_asm(&target_dir.join("release").join("deps"))
        .expect("No bastion_codegen .s file emitted");

    std::fs::read_to_string(asm).expect("Failed to read emitted assembly")
}

fn find_asm(deps: &Path) -> Option<PathBuf> {
    std::fs::read_dir(deps)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "s"))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("bastion_codegen"))
        })
        .max_by_key(|path| {
            std::fs::metadata(path)
                .and_then(|meta| meta.modified())
                .ok()
        })
}

/// Number of instructions in `symbol` with a `(%rdi)` memory operand.
fn rdi_accesses(asm: &str, symbol: &str) -> usize {
    let label = format!("{symbol}:");

    asm.lines()
        .skip_while(|line| line.trim() != label)
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with(".Lfunc_end"))
        .filter(|line| !line.trim_start().starts_with('.'))
        .filter(|line| line.contains("(%rdi)"))
        .count()
}

#[test]
#[ignore = "builds the crate in release mode"]
fn test_codegen_single_access() {
    let asm = emit_asm();

    assert_eq!(rdi_accesses(asm, "bastion_emit_plain_read_twice"), 1);
    assert_eq!(rdi_accesses(asm, "bastion_emit_read_once_twice"), 2);
    assert_eq!(rdi_accesses(asm, "bastion_emit_plain_store_twice"), 1);
    assert_eq!(rdi_accesses(asm, "bastion_emit_barrier_between_stores"), 2);
    assert_eq!(rdi_accesses(asm, "bastion_emit_write_once_twice"), 2);
}

#[test]
#[ignore = "builds the crate in release mode"]
fn test_codegen_fallback_tier_is_not_fused() {
    let asm = emit_asm();

    assert_eq!(rdi_accesses(asm, "bastion_emit_fallback_read_twice"), 6);
    assert_eq!(rdi_accesses(asm, "bastion_emit_fallback_write_twice"), 6);
}

#[test]
fn test_rdi_accesses_parser() {
    let asm = "\
twice:
\t.cfi_startproc
\tmovl\t(%rdi), %eax
\taddl\t(%rdi), %eax
\tretq
.Lfunc_end0:
other:
\tmovl\t$1, (%rdi)
";

    assert_eq!(rdi_accesses(asm, "twice"), 2);
    assert_eq!(rdi_accesses(asm, "other"), 1);
    assert_eq!(rdi_accesses(asm, "missing"), 0);
}
