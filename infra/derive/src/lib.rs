#![allow(unreachable_pub)]

//! # Derive
//!
//! Procedural macros for the console workspace. Right now this is the single
//! `#[orbit_error]` attribute that every crate uses to declare its error enum.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext<T>` with `.context(...)` for `Result<T, ErrorName>` and, for every
///   variant carrying a `source`, for `Result<T, SourceError>` as well.
/// * `From<SourceError>` for every variant with a `source` field (so `?` works).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[orbit_derive::orbit_error]
/// pub enum RouteError {
///     #[error("Missing route parameter{}: {message}", format_context(.context))]
///     MissingParam { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal route error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn orbit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
