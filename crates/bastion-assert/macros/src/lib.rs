// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `bastion-assert` crate.
//!
//! Provides [`is_constexpr!`] and [`const_true!`]. Use them through
//! `bastion-assert`, which re-exports both.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod constexpr;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Expr, parse_macro_input};

/// Expands to `true` if the expression is a compile-time constant, `false`
/// otherwise.
///
/// The expression is type-checked but never evaluated, so its side effects
/// cannot run and it may even name functions that panic. A verdict of `true`
/// is confirmed by placing the expression in a never-taken branch of an inline
/// `const` block: a misspelled name, a `static mut` or a local that merely
/// looks like a constant is a build error rather than a wrong answer.
///
/// Constants are literals, `SCREAMING_SNAKE_CASE` paths (`LEN`, `u32::MAX`,
/// const generic `N`), inline `const { .. }` blocks, `size_of::<T>()` /
/// `align_of::<T>()`, literal-producing builtin macros, and any combination of
/// those through operators, casts, tuples, arrays, indexing and `if`/`else`.
/// Every operand has to qualify, so `true || flag` is not constant.
///
/// # Example
///
/// ```rust
/// use bastion_assert::is_constexpr;
///
/// const LANES: usize = 4;
/// let lanes = LANES;
///
/// assert!(is_constexpr!(2 + 2));
/// assert!(is_constexpr!(LANES * size_of::<u32>()));
/// assert!(!is_constexpr!(lanes * 2));
/// assert!(!is_constexpr!(std::process::abort()));
/// ```
///
/// Names are resolved like in any other expression:
///
/// ```rust,compile_fail,E0425
/// use bastion_assert::is_constexpr;
///
/// assert!(is_constexpr!(NO_SUCH_CONSTANT + 1));
/// ```
///
/// ```rust,compile_fail,E0425
/// use bastion_assert::is_constexpr;
///
/// assert!(!is_constexpr!(no_such_function(1, 2)));
/// ```
///
/// A `static mut` is a runtime variable whatever its name:
///
/// ```rust,compile_fail
/// use bastion_assert::is_constexpr;
///
/// static mut COUNTER: u32 = 0;
///
/// let _ = is_constexpr!(COUNTER + 1);
/// ```
#[proc_macro]
pub fn is_constexpr(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    expand_is_constexpr(&expr).into()
}

/// Expands to the expression if it is a compile-time constant, `false`
/// otherwise.
///
/// The result is itself a constant, usable in `const` items and in
/// `compiletime_assert!` conditions.
///
/// # Example
///
/// ```rust
/// use bastion_assert::const_true;
///
/// const WIDE: bool = const_true!(size_of::<usize>() >= 4);
/// let flag = true;
///
/// assert!(WIDE);
/// assert!(!const_true!(flag));
/// ```
#[proc_macro]
pub fn const_true(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);
    expand_const_true(&expr).into()
}

pub(crate) fn expand_is_constexpr(expr: &Expr) -> TokenStream2 {
    if constexpr::is_constexpr(expr) {
        quote! {
            {
                const {
                    if false {
                        let _ = &(#expr);
                    }
                }
                true
            }
        }
    } else {
        quote! {
            {
                let _ = || {
                    let _ = &(#expr);
                };
                false
            }
        }
    }
}

pub(crate) fn expand_const_true(expr: &Expr) -> TokenStream2 {
    if constexpr::is_constexpr(expr) {
        quote! {
            const {
                let __bastion_const_true: bool = #expr;
                __bastion_const_true
            }
        }
    } else {
        quote! {
            {
                let _ = || {
                    let _: bool = #expr;
                };
                false
            }
        }
    }
}
