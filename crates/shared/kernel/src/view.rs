//! Minimal render output shared by pages, layouts, dashboards and trigger forms.

use crate::route::Params;
use crate::store::AppState;
use std::borrow::Cow;
use std::fmt;

/// What a render function produces: a title and body lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub title: Cow<'static, str>,
    pub lines: Vec<String>,
}

impl View {
    #[must_use]
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        Self { title: title.into(), lines: Vec::new() }
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Inputs handed to a page render function.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub page_id: &'a str,
    pub params: &'a Params,
    pub query: &'a Params,
    pub state: &'a AppState,
}

impl PageContext<'_> {
    /// Path parameter value, or `""` when absent.
    #[must_use]
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).map_or("", String::as_str)
    }
}

/// A renderable page.
pub type Page = fn(&PageContext<'_>) -> View;

/// Wraps a rendered page (navigation chrome, module header).
pub type Layout = fn(View, &PageContext<'_>) -> View;
