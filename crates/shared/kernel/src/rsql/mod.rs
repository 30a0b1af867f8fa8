//! RSQL filter-expression builder.
//!
//! Every constructor validates its operands and returns a typed [`Rsql`] fragment, so
//! groups built with [`and`] / [`or`] only ever contain well-formed pieces.
//!
//! ```rust
//! use orbit_kernel::rsql::{and, equals, includes};
//!
//! let filter = and([equals("name", "john")?, includes("age", [10, 20, 30])?])?;
//! assert_eq!(filter.as_str(), "(name==john;age=in=(10,20,30))");
//! # Ok::<(), orbit_kernel::rsql::RsqlError>(())
//! ```
//!
//! No escaping or quoting is performed: operands carrying a reserved character are rejected.

mod error;

pub use error::{RsqlError, RsqlErrorExt};

use std::fmt;

/// Characters with grammatical meaning in RSQL (besides whitespace).
pub const RESERVED: &[char] = &['<', '>', ';', ',', '(', ')', '"', '\'', '=', '!', '~'];

/// A validated RSQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rsql(String);

impl Rsql {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Rsql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Rsql {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Rsql> for String {
    fn from(expr: Rsql) -> Self {
        expr.0
    }
}

/// Binary comparison operators and their grammar tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl Comparison {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => "=ge=",
            Self::Le => "=le=",
            Self::Gt => "=gt=",
            Self::Lt => "=lt=",
        }
    }
}

/// `field<op>value` for any [`Comparison`].
///
/// # Errors
/// Returns [`RsqlError`] if the field or value is empty or contains a reserved character.
pub fn compare(field: &str, op: Comparison, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    let value = value.to_string();
    check_operand("field", field)?;
    check_operand("value", &value)?;
    Ok(Rsql(format!("{field}{}{value}", op.token())))
}

/// `field==value`.
///
/// # Errors
/// See [`compare`].
pub fn equals(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Eq, value)
}

/// Alias of [`equals`].
///
/// # Errors
/// See [`compare`].
pub fn eq(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Eq, value)
}

/// `field!=value`.
///
/// # Errors
/// See [`compare`].
pub fn ne(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Ne, value)
}

/// `field=ge=value`.
///
/// # Errors
/// See [`compare`].
pub fn ge(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Ge, value)
}

/// `field=le=value`.
///
/// # Errors
/// See [`compare`].
pub fn le(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Le, value)
}

/// `field=gt=value`.
///
/// # Errors
/// See [`compare`].
pub fn gt(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Gt, value)
}

/// `field=lt=value`.
///
/// # Errors
/// See [`compare`].
pub fn lt(field: &str, value: impl fmt::Display) -> Result<Rsql, RsqlError> {
    compare(field, Comparison::Lt, value)
}

/// `field=in=(v1,v2,...)`.
///
/// # Errors
/// Returns [`RsqlError::Empty`] for an empty list, otherwise see [`compare`].
pub fn includes<I>(field: &str, values: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    membership(field, "=in=", values)
}

/// `field=out=(v1,v2,...)`.
///
/// # Errors
/// Same as [`includes`].
pub fn excludes<I>(field: &str, values: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    membership(field, "=out=", values)
}

/// `(e1;e2;...)`.
///
/// # Errors
/// Returns [`RsqlError::Empty`] when no expression is given.
pub fn and<I>(exprs: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator<Item = Rsql>,
{
    group(exprs, ";")
}

/// `(e1,e2,...)`.
///
/// # Errors
/// Returns [`RsqlError::Empty`] when no expression is given.
pub fn or<I>(exprs: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator<Item = Rsql>,
{
    group(exprs, ",")
}

fn membership<I>(field: &str, token: &str, values: I) -> Result<Rsql, RsqlError>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    check_operand("field", field)?;

    let mut list = Vec::new();
    for value in values {
        let value = value.to_string();
        check_operand("value", &value)?;
        list.push(value);
    }
    if list.is_empty() {
        return Err(RsqlError::Empty {
            message: format!("value list for '{field}'").into(),
            context: None,
        });
    }

    Ok(Rsql(format!("{field}{token}({})", list.join(","))))
}

fn group<I>(exprs: I, separator: &str) -> Result<Rsql, RsqlError>
where
    I: IntoIterator<Item = Rsql>,
{
    let parts: Vec<String> = exprs.into_iter().map(Rsql::into_string).collect();
    if parts.is_empty() {
        return Err(RsqlError::Empty { message: "expression group".into(), context: None });
    }
    Ok(Rsql(format!("({})", parts.join(separator))))
}

fn check_operand(kind: &'static str, text: &str) -> Result<(), RsqlError> {
    if text.is_empty() {
        return Err(RsqlError::Empty { message: kind.into(), context: None });
    }
    if let Some(c) = text.chars().find(|c| c.is_whitespace() || RESERVED.contains(c)) {
        return Err(RsqlError::ReservedCharacter {
            message: format!("{kind} '{text}' contains {c:?}").into(),
            context: None,
        });
    }
    Ok(())
}
