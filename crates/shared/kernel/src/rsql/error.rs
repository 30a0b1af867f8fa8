use std::borrow::Cow;

/// Rejections raised while building an RSQL expression.
#[orbit_derive::orbit_error]
pub enum RsqlError {
    /// A field or value contains a character with meaning in the RSQL grammar.
    #[error("Reserved RSQL character{}: {message}", format_context(.context))]
    ReservedCharacter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Empty field, empty value, empty `in` list or empty group.
    #[error("Empty RSQL operand{}: {message}", format_context(.context))]
    Empty { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
