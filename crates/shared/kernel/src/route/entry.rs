use super::{Params, RouteError};
use crate::view::{Layout, Page};
use orbit_domain::features::FeatureFlags;
use orbit_domain::module::ModuleName;
use std::borrow::Cow;
use typed_builder::TypedBuilder;

/// One navigable page.
///
/// `path` is a template whose `:name` segments are filled by [`RouteEntry::url`],
/// e.g. `/account/:accountId/cd/pipelines/:pipelineId`.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RouteEntry {
    #[builder(setter(into))]
    pub path: Cow<'static, str>,
    #[builder(setter(into))]
    pub title: Cow<'static, str>,
    #[builder(setter(into))]
    pub page_id: Cow<'static, str>,
    pub page: Page,
    #[builder(default, setter(strip_option))]
    pub layout: Option<Layout>,
    /// Flags that must all be enabled for the route to be mounted.
    #[builder(default)]
    pub flags: FeatureFlags,
    /// Owning module; assigned when the entry is added to a module's table.
    #[builder(default = ModuleName::Common, setter(skip))]
    pub module: ModuleName,
}

impl RouteEntry {
    /// Builds a concrete URL from path parameters and query parameters.
    ///
    /// Values are percent-encoded; query pairs are emitted in key order.
    ///
    /// # Errors
    /// Returns [`RouteError::MissingParam`] if a `:name` segment has no value, or an empty
    /// one, in `params`.
    pub fn url(&self, params: &Params, query: &Params) -> Result<String, RouteError> {
        let mut segments = Vec::new();
        for segment in self.path.split('/') {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value =
                        params.get(name).filter(|v| !v.is_empty()).ok_or_else(|| RouteError::MissingParam {
                            message: format!("'{name}' for {}", self.path).into(),
                            context: None,
                        })?;
                    segments.push(urlencoding::encode(value));
                }
                None => segments.push(Cow::Borrowed(segment)),
            }
        }

        let mut url = segments.join("/");
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        Ok(url)
    }

    /// Matches a concrete path (no query string) against the template and extracts
    /// its parameters. A trailing slash is ignored.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        let template = trim_trailing_slash(&self.path);
        let concrete = trim_trailing_slash(path);

        let mut params = Params::new();
        let mut expected = template.split('/');
        let mut actual = concrete.split('/');
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(want), Some(got)) => match want.strip_prefix(':') {
                    Some(name) if !got.is_empty() => {
                        let value = urlencoding::decode(got).ok()?;
                        params.insert(name.to_owned(), value.into_owned());
                    }
                    Some(_) => return None,
                    None if want == got => {}
                    None => return None,
                },
                _ => return None,
            }
        }
    }

    /// Number of literal (non-parameter) segments, used to prefer specific templates.
    #[must_use]
    pub fn specificity(&self) -> usize {
        self.path.split('/').filter(|s| !s.is_empty() && !s.starts_with(':')).count()
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path }
}
