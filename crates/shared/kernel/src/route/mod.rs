//! Route entries and route-table aggregation.

mod entry;
mod error;
mod table;

pub use entry::RouteEntry;
pub use error::{RouteError, RouteErrorExt};
pub use table::{RouteTable, UniquenessReport};

use std::collections::BTreeMap;

/// Path or query parameters, ordered by name.
pub type Params = BTreeMap<String, String>;

/// Collects `(name, value)` pairs into [`Params`].
pub fn params<I, K, V>(pairs: I) -> Params
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PageContext, View};
    use orbit_domain::module::ModuleName;

    fn blank(_: &PageContext<'_>) -> View {
        View::new("blank")
    }

    fn entry(path: &'static str, page_id: &'static str) -> RouteEntry {
        RouteEntry::builder().path(path).title(page_id).page_id(page_id).page(blank).build()
    }

    #[test]
    fn url_substitutes_params_and_sorts_query() -> Result<(), RouteError> {
        let route = entry("/account/:accountId/cd/pipelines/:pipelineId", "pipeline");
        let url = route.url(
            &params([("accountId", "acc 1"), ("pipelineId", "deploy")]),
            &params([("view", "yaml"), ("branch", "main")]),
        )?;
        assert_eq!(url, "/account/acc%201/cd/pipelines/deploy?branch=main&view=yaml");
        Ok(())
    }

    #[test]
    fn url_does_not_touch_inputs() -> Result<(), RouteError> {
        let route = entry("/account/:accountId", "home");
        let path = params([("accountId", "a")]);
        let query = Params::new();
        let before = path.clone();
        route.url(&path, &query)?;
        assert_eq!(path, before);
        Ok(())
    }

    #[test]
    fn missing_param_is_an_error() {
        let route = entry("/account/:accountId/ci", "ci-home");
        let err = route.url(&Params::new(), &Params::new()).unwrap_err();
        assert!(matches!(err, RouteError::MissingParam { .. }));
    }

    #[test]
    fn empty_param_is_missing() {
        let route = entry("/account/:accountId/cd/home", "cd-home");
        let err = route.url(&params([("accountId", "")]), &Params::new()).unwrap_err();
        assert!(matches!(err, RouteError::MissingParam { .. }));

        let url = route.url(&params([("accountId", "acc")]), &Params::new()).expect("url");
        assert!(route.matches(&url).is_some());
    }

    #[test]
    fn matching_extracts_params() {
        let route = entry("/account/:accountId/cf/flags/:flag", "flag");
        let found = route.matches("/account/abc/cf/flags/dark%20mode/").expect("matches");
        assert_eq!(found.get("flag").map(String::as_str), Some("dark mode"));
        assert!(route.matches("/account/abc/cf/flags").is_none());
        assert!(route.matches("/account//cf/flags/x").is_none());
    }

    #[test]
    fn resolve_prefers_literal_segments() {
        let table = RouteTable::for_module(ModuleName::Cd)
            .with("pipeline", entry("/cd/pipelines/:id", "pipeline"))
            .with("new", entry("/cd/pipelines/new", "pipeline-new"));

        let (name, _, params) = table.resolve("/cd/pipelines/new").expect("resolves");
        assert_eq!(name, "new");
        assert!(params.is_empty());

        let (name, _, _) = table.resolve("/cd/pipelines/p1").expect("resolves");
        assert_eq!(name, "pipeline");
    }

    #[test]
    fn merge_is_last_wins_by_name() {
        let first = RouteTable::for_module(ModuleName::Ci).with("home", entry("/ci", "ci-home"));
        let second = RouteTable::for_module(ModuleName::Cd).with("home", entry("/cd", "cd-home"));

        let merged = RouteTable::aggregate([first, second]);
        assert_eq!(merged.len(), 1);
        let home = merged.get("home").expect("home");
        assert_eq!(home.path, "/cd");
        assert_eq!(home.module, ModuleName::Cd);
    }

    #[test]
    fn uniqueness_reports_shared_paths_and_page_ids() {
        let table = RouteTable::default()
            .with("a", entry("/x", "page-a"))
            .with("b", entry("/x", "page-b"))
            .with("c", entry("/y", "page-a"));

        let report = table.uniqueness();
        assert_eq!(report.duplicate_paths, vec!["/x".to_owned()]);
        assert_eq!(report.duplicate_page_ids, vec!["page-a".to_owned()]);
        assert!(matches!(table.validate_unique(), Err(RouteError::Duplicate { .. })));
    }

    #[test]
    fn merge_does_not_enforce_uniqueness() {
        let table = RouteTable::aggregate([
            RouteTable::default().with("one", entry("/same", "one")),
            RouteTable::default().with("two", entry("/same", "two")),
        ]);
        assert_eq!(table.len(), 2);
        assert!(!table.uniqueness().is_clean());
    }
}
