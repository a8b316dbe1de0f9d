// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Syntactic constant-expression classification.
//!
//! The classifier walks the expression tree and never emits the expression
//! itself, so nothing it inspects can run. It is conservative: `true` means
//! every operand is a literal, a constant item, an inline `const` block or a
//! layout query; anything it cannot prove (function and method calls, locals,
//! dereferences, assignments) makes the whole expression non-constant.

use syn::{BinOp, Block, Expr, ExprCall, Macro, Path, Stmt, UnOp};

/// Layout queries the compiler always folds.
const LAYOUT_QUERIES: &[&str] = &["size_of", "align_of"];

/// Built-in macros expanding to literals.
const LITERAL_MACROS: &[&str] = &[
    "cfg",
    "column",
    "concat",
    "env",
    "file",
    "include_bytes",
    "include_str",
    "line",
    "module_path",
    "stringify",
];

/// Returns `true` if `expr` can be folded to a compile-time constant.
pub(crate) fn is_constexpr(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(_) | Expr::Const(_) => true,
        Expr::Paren(e) => is_constexpr(&e.expr),
        Expr::Group(e) => is_constexpr(&e.expr),
        Expr::Unary(e) => matches!(e.op, UnOp::Not(_) | UnOp::Neg(_)) && is_constexpr(&e.expr),
        Expr::Binary(e) => is_pure_binop(&e.op) && is_constexpr(&e.left) && is_constexpr(&e.right),
        Expr::Cast(e) => is_constexpr(&e.expr),
        Expr::Path(e) => e.qself.is_none() && is_const_path(&e.path),
        Expr::Call(e) => is_layout_query(e),
        Expr::Macro(e) => is_literal_macro(&e.mac),
        Expr::Tuple(e) => e.elems.iter().all(is_constexpr),
        Expr::Array(e) => e.elems.iter().all(is_constexpr),
        Expr::Repeat(e) => is_constexpr(&e.expr) && is_constexpr(&e.len),
        Expr::Index(e) => is_constexpr(&e.expr) && is_constexpr(&e.index),
        Expr::Field(e) => is_constexpr(&e.base),
        Expr::Block(e) => e.label.is_none() && is_constexpr_block(&e.block),
        Expr::If(e) => {
            is_constexpr(&e.cond)
                && is_constexpr_block(&e.then_branch)
                && e.else_branch
                    .as_ref()
                    .is_some_and(|(_, otherwise)| is_constexpr(otherwise))
        }
        _ => false,
    }
}

/// A block counts only when it is a single tail expression: `{ A + 1 }`.
fn is_constexpr_block(block: &Block) -> bool {
    match block.stmts.as_slice() {
        [Stmt::Expr(tail, None)] => is_constexpr(tail),
        _ => false,
    }
}

fn is_pure_binop(op: &BinOp) -> bool {
    matches!(
        op,
        BinOp::Add(_)
            | BinOp::Sub(_)
            | BinOp::Mul(_)
            | BinOp::Div(_)
            | BinOp::Rem(_)
            | BinOp::And(_)
            | BinOp::Or(_)
            | BinOp::BitXor(_)
            | BinOp::BitAnd(_)
            | BinOp::BitOr(_)
            | BinOp::Shl(_)
            | BinOp::Shr(_)
            | BinOp::Eq(_)
            | BinOp::Lt(_)
            | BinOp::Le(_)
            | BinOp::Ne(_)
            | BinOp::Ge(_)
            | BinOp::Gt(_)
    )
}

/// Constant items and associated constants are `SCREAMING_SNAKE_CASE`
/// (`LANES`, `u32::MAX`, `Self::WIDTH`, const generic `N`).
fn is_const_path(path: &Path) -> bool {
    path.segments
        .last()
        .is_some_and(|segment| is_screaming_case(&segment.ident.to_string()))
}

pub(crate) fn is_screaming_case(ident: &str) -> bool {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);

    ident.bytes().any(|b| b.is_ascii_uppercase())
        && ident
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

/// `size_of::<T>()` and `align_of::<T>()`, under any path prefix.
fn is_layout_query(call: &ExprCall) -> bool {
    if !call.args.is_empty() {
        return false;
    }

    match call.func.as_ref() {
        Expr::Path(func) if func.qself.is_none() => func
            .path
            .segments
            .last()
            .is_some_and(|segment| LAYOUT_QUERIES.iter().any(|&q| segment.ident == q)),
        _ => false,
    }
}

fn is_literal_macro(mac: &Macro) -> bool {
    mac.path
        .segments
        .last()
        .is_some_and(|segment| LITERAL_MACROS.iter().any(|&m| segment.ident == m))
}
