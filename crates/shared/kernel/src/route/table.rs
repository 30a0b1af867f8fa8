use super::{Params, RouteEntry, RouteError};
use fxhash::FxHashMap;
use indexmap::IndexMap;
use orbit_domain::module::ModuleName;
use std::borrow::Cow;
use tracing::warn;

/// Route entries keyed by logical route name, in insertion order.
///
/// Merging is a shallow union where later entries replace earlier ones with the same
/// name. Path and page-id uniqueness is *not* enforced here; it is checked on demand by
/// [`RouteTable::validate_unique`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    module: Option<ModuleName>,
    entries: IndexMap<Cow<'static, str>, RouteEntry>,
}

/// Result of the uniqueness property check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquenessReport {
    pub duplicate_paths: Vec<String>,
    pub duplicate_page_ids: Vec<String>,
}

impl UniquenessReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_paths.is_empty() && self.duplicate_page_ids.is_empty()
    }
}

impl RouteTable {
    /// A table whose entries all belong to `module`.
    #[must_use]
    pub fn for_module(module: ModuleName) -> Self {
        Self { module: Some(module), entries: IndexMap::new() }
    }

    /// Merges many tables into one, in order.
    #[must_use]
    pub fn aggregate<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        tables.into_iter().fold(Self::default(), |mut acc, table| {
            acc.merge(table);
            acc
        })
    }

    /// Adds `entry` under `name`, replacing any entry of the same name.
    pub fn add(&mut self, name: impl Into<Cow<'static, str>>, mut entry: RouteEntry) -> &mut Self {
        if let Some(module) = self.module {
            entry.module = module;
        }
        self.entries.insert(name.into(), entry);
        self
    }

    /// Builder-style [`RouteTable::add`].
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, entry: RouteEntry) -> Self {
        self.add(name, entry);
        self
    }

    /// Shallow union: entries of `other` replace same-named entries of `self`.
    pub fn merge(&mut self, other: Self) {
        for (name, entry) in other.entries {
            if let Some(previous) = self.entries.insert(name.clone(), entry) {
                warn!(route = %name, shadowed = %previous.path, "Route replaced during merge");
            }
        }
    }

    /// Hands every entry to `module`, whatever the table was built with.
    pub(crate) fn assign_module(&mut self, module: ModuleName) {
        self.module = Some(module);
        for entry in self.entries.values_mut() {
            entry.module = module;
        }
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &RouteEntry) -> bool) {
        self.entries.retain(|name, entry| keep(name, entry));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn by_page_id(&self, page_id: &str) -> Option<&RouteEntry> {
        self.entries.values().find(|e| e.page_id == page_id)
    }

    /// Finds the entry matching a concrete path; the most specific template wins and
    /// ties go to the earliest entry.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&str, &RouteEntry, Params)> {
        let mut best: Option<(&str, &RouteEntry, Params)> = None;
        for (name, entry) in &self.entries {
            let Some(params) = entry.matches(path) else { continue };
            let better = best.as_ref().is_none_or(|(_, b, _)| entry.specificity() > b.specificity());
            if better {
                best = Some((name.as_ref(), entry, params));
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_ref(), entry))
    }

    pub fn module_routes(&self, module: ModuleName) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.iter().filter(move |(_, e)| e.module == module)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collects every path and page id that appears more than once.
    #[must_use]
    pub fn uniqueness(&self) -> UniquenessReport {
        UniquenessReport {
            duplicate_paths: duplicates(self.entries.values().map(|e| e.path.as_ref())),
            duplicate_page_ids: duplicates(self.entries.values().map(|e| e.page_id.as_ref())),
        }
    }

    /// Property check: no two entries share a `path`, no two share a `page_id`.
    ///
    /// # Errors
    /// Returns [`RouteError::Duplicate`] listing the offending values.
    pub fn validate_unique(&self) -> Result<(), RouteError> {
        let report = self.uniqueness();
        if report.is_clean() {
            return Ok(());
        }
        Err(RouteError::Duplicate {
            message: format!(
                "paths {:?}, page ids {:?}",
                report.duplicate_paths, report.duplicate_page_ids
            )
            .into(),
            context: None,
        })
    }
}

fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order = Vec::new();
    for value in values {
        let count = seen.entry(value).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(value.to_owned());
        }
    }
    order
}
