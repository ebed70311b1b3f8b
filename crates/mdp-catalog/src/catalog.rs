//! Immutable catalog snapshot.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::document::DocumentRecord;

/// A catalog entry: either a rendered document or a parsed menu.
///
/// Serializes as the inner record, without a variant tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// Rendered markdown document.
    Document(DocumentRecord),
    /// Parsed `menu.json` content.
    Menu(Value),
}

/// Mapping from relative path key to entry.
///
/// Document keys are relative paths without the `.md` extension
/// (`guide/intro`); menu keys keep the full relative path
/// (`guide/menu.json`). Keys always use `/` separators.
///
/// A catalog is never modified after it is built; rebuilds produce a new one.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Entry>,
}

impl Catalog {
    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Insert an entry, returning the one it replaced.
    pub(crate) fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        self.entries.insert(key, entry)
    }
}

impl FromIterator<(String, Entry)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Map, json};

    use super::*;

    #[test]
    fn test_entry_serializes_without_tag() {
        let document = Entry::Document(DocumentRecord {
            attrs: Map::new(),
            body: "<p>x</p>".to_owned(),
        });
        let menu = Entry::Menu(json!([{"title": "Intro"}]));

        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({"attrs": {}, "body": "<p>x</p>"})
        );
        assert_eq!(
            serde_json::to_value(&menu).unwrap(),
            json!([{"title": "Intro"}])
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog: Catalog = [
            ("guide/intro".to_owned(), Entry::Menu(json!(1))),
            ("guide/menu.json".to_owned(), Entry::Menu(json!(2))),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("guide/intro"));
        assert_eq!(catalog.get("guide/menu.json"), Some(&Entry::Menu(json!(2))));
        assert!(catalog.get("guide").is_none());
        assert_eq!(
            catalog.keys().collect::<Vec<_>>(),
            vec!["guide/intro", "guide/menu.json"]
        );
    }

    #[test]
    fn test_insert_returns_replaced_entry() {
        let mut catalog = Catalog::default();
        assert!(catalog.insert("a".to_owned(), Entry::Menu(json!(1))).is_none());
        assert_eq!(
            catalog.insert("a".to_owned(), Entry::Menu(json!(2))),
            Some(Entry::Menu(json!(1)))
        );
        assert_eq!(catalog.len(), 1);
    }
}
