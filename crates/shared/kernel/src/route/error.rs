use std::borrow::Cow;

#[orbit_derive::orbit_error]
pub enum RouteError {
    /// A `:name` segment had no value in the supplied parameters.
    #[error("Missing route parameter{}: {message}", format_context(.context))]
    MissingParam { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two or more entries share a path and/or a page id.
    #[error("Route table is not unique{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
