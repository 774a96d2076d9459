//! Namespace → documentation base URL registry.
//!
//! A [`UrlMap`] is built once (from the built-in table, map files, or both)
//! and never mutated afterwards. Lookups are exact and case-sensitive; a
//! namespace that is not registered is simply `None`, which callers walking
//! many symbols will see for every library without online docs.

mod builtin;
mod entry;
mod error;
mod persist;

use std::collections::HashMap;

pub use builtin::BUILTIN_ENTRIES;
pub use entry::Entry;
pub use error::MapError;
pub use persist::read_entries;

/// Immutable, ordered namespace → base URL table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMap {
    entries: Vec<Entry>,
    /// Namespace → position in `entries`.
    index: HashMap<String, usize>,
}

impl UrlMap {
    /// Build a map from entries in declaration order.
    ///
    /// Rejects duplicate namespaces and empty namespaces or URLs.
    pub fn from_entries<I>(entries: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = Entry>,
    {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.namespace.is_empty() {
                return Err(MapError::EmptyNamespace { index: i });
            }
            if entry.base_url.is_empty() {
                return Err(MapError::EmptyUrl {
                    namespace: entry.namespace.clone(),
                });
            }
            if index.insert(entry.namespace.clone(), i).is_some() {
                return Err(MapError::DuplicateNamespace(entry.namespace.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// The built-in GLib family table.
    pub fn builtin() -> Self {
        let entries: Vec<Entry> = BUILTIN_ENTRIES.iter().copied().map(Entry::from).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.namespace.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Base URL registered for `namespace`, if any.
    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.index
            .get(namespace)
            .map(|&i| self.entries[i].base_url.as_str())
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.index.contains_key(namespace)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.namespace.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UrlMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a UrlMap {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_lookups_return_listed_urls() {
        let map = UrlMap::builtin();
        assert_eq!(map.get("GLib"), Some("https://docs.gtk.org/glib/"));
        assert_eq!(map.get("GLibUnix"), Some("https://docs.gtk.org/glib-unix/"));
        assert_eq!(map.get("GObject"), Some("https://docs.gtk.org/gobject/"));
        assert_eq!(map.get("Gio"), Some("https://docs.gtk.org/gio/"));
    }

    #[test]
    fn unknown_namespace_is_absent() {
        let map = UrlMap::builtin();
        assert_eq!(map.get("NonexistentNamespace"), None);
        assert_eq!(map.get(""), None);
        assert!(!map.contains("Gtk"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map = UrlMap::builtin();
        assert_eq!(map.get("glib"), None);
        assert_eq!(map.get("GLIB"), None);
        assert_eq!(map.get("gio"), None);
    }

    #[test]
    fn entries_keep_declaration_order() {
        let map = UrlMap::builtin();
        let names: Vec<&str> = map.namespaces().collect();
        assert_eq!(names, ["GLib", "GLibUnix", "GObject", "Gio"]);
        assert_eq!(map.entries().len(), 4);
        assert_eq!(map.len(), 4);
        assert!(!map.is_empty());
    }

    #[test]
    fn repeated_lookups_are_stable() {
        let map = UrlMap::builtin();
        let first = map.get("GObject");
        for _ in 0..10 {
            assert_eq!(map.get("GObject"), first);
            assert_eq!(map.get("Missing"), None);
        }
        assert_eq!(map, UrlMap::builtin());
    }

    #[test]
    fn builtin_namespaces_are_unique() {
        let map = UrlMap::builtin();
        let unique: HashSet<&str> = map.namespaces().collect();
        assert_eq!(unique.len(), map.len());
        // The checked constructor accepts the same table.
        let checked = UrlMap::from_entries(map.entries().to_vec()).unwrap();
        assert_eq!(checked, map);
    }

    #[test]
    fn from_entries_rejects_duplicate_namespace() {
        let err = UrlMap::from_entries([
            Entry::new("Gtk", "https://docs.gtk.org/gtk4/"),
            Entry::new("Gdk", "https://docs.gtk.org/gdk4/"),
            Entry::new("Gtk", "https://example.org/gtk/"),
        ])
        .unwrap_err();
        assert_eq!(err, MapError::DuplicateNamespace("Gtk".to_string()));
    }

    #[test]
    fn from_entries_rejects_empty_fields() {
        let err = UrlMap::from_entries([Entry::new("", "https://example.org/")]).unwrap_err();
        assert_eq!(err, MapError::EmptyNamespace { index: 0 });

        let err = UrlMap::from_entries([
            Entry::new("Pango", "https://docs.gtk.org/Pango/"),
            Entry::new("Gsk", ""),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MapError::EmptyUrl {
                namespace: "Gsk".to_string()
            }
        );
    }

    #[test]
    fn empty_map_finds_nothing() {
        let map = UrlMap::from_entries(Vec::new()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.get("GLib"), None);
    }

    #[test]
    fn shared_across_threads_without_locking() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlMap>();

        let map = UrlMap::builtin();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(map.get("Gio"), Some("https://docs.gtk.org/gio/"));
                    assert_eq!(map.get("glib"), None);
                });
            }
        });
    }
}
