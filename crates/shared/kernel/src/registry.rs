//! Typed lookup tables populated during bootstrap.
//!
//! A [`Registry`] holds at most one value per key. Registering a key twice keeps the
//! later value; the replacement is reported with a `warn!` and is otherwise silent.
//! Lookups never fail: `None` means the module is simply not installed in this build.

use fxhash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use tracing::{trace, warn};

pub struct Registry<K, V> {
    name: &'static str,
    entries: FxHashMap<K, V>,
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates an empty registry. `name` only appears in diagnostics.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, entries: FxHashMap::default() }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Inserts or replaces the value for `key`.
    pub fn register(&mut self, key: K, value: V) {
        if self.entries.contains_key(&key) {
            warn!(registry = self.name, key = ?key, "Registration replaced an existing handler");
        } else {
            trace!(registry = self.name, key = ?key, "Handler registered");
        }
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K, V> fmt::Debug for Registry<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_domain::module::ModuleName;
    use proptest::prelude::*;

    #[test]
    fn later_registration_wins() {
        let mut registry = Registry::new("test");
        registry.register(ModuleName::Cd, "first");
        registry.register(ModuleName::Cd, "second");

        assert_eq!(registry.get(&ModuleName::Cd), Some(&"second"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let mut registry = Registry::new("test");
        registry.register(ModuleName::Ci, 1);

        assert!(registry.get(&ModuleName::Cv).is_none());
        assert!(!registry.contains(&ModuleName::Cv));
    }

    #[test]
    fn string_keys_borrow_as_str() {
        let mut registry: Registry<String, u8> = Registry::new("triggers");
        registry.register("default".to_owned(), 7);

        assert_eq!(registry.get("default"), Some(&7));
        assert!(registry.get("webhook").is_none());
    }

    proptest! {
        #[test]
        fn last_value_per_key_is_kept(writes in proptest::collection::vec((0u8..8, any::<u32>()), 0..64)) {
            let mut registry = Registry::new("prop");
            let mut expected = std::collections::HashMap::new();
            for (key, value) in &writes {
                registry.register(*key, *value);
                expected.insert(*key, *value);
            }

            prop_assert_eq!(registry.len(), expected.len());
            for (key, value) in &expected {
                prop_assert_eq!(registry.get(key), Some(value));
            }
        }
    }
}
