//! Search index and query filtering over a [`Catalogue`].
//!
//! Two independent passes run per query:
//!
//! - **Filtering** keeps groups whose title, or any entry name or
//!   declaration, contains the query; categories survive when one of their
//!   groups does. Order is preserved.
//! - **Expansion** scans every key of the [`SearchIndex`] and collects the
//!   [`GroupId`]s of matching keys. Those groups render expanded.
//!
//! The two passes do not consult each other. Index keys include group
//! descriptions while filtering does not, and colliding group identifiers
//! expand together.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{Catalogue, Category, GroupId, UtilityGroup};

/// A normalized user query: lowercased, whitespace kept as typed.
///
/// Only the empty string is the empty query; `" "` is a real query that
/// matches text containing a space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test against `text`.
    pub fn matches(&self, text: &str) -> bool {
        lowercase(text).contains(self.0.as_str())
    }
}

/// `text` lowercased, borrowed when lowercasing would not change it.
fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| c.to_lowercase().eq([c])) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Index
// ────────────────────────────────────────────────────────────────────────────

/// Lowercase text keys mapped to the group that owns them.
///
/// Keys keep insertion order. When two sources produce the same key the
/// first registration wins.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    keys: IndexMap<String, GroupId>,
}

impl SearchIndex {
    pub fn build(catalogue: &Catalogue) -> Self {
        let mut index = Self::default();
        for group in catalogue.groups() {
            let id = group.id();
            index.register(&group.key_text(), &id);
            for entry in &group.entries {
                index.register(&entry.name, &id);
                index.register(&entry.css, &id);
            }
        }
        debug!(keys = index.len(), "search index built");
        index
    }

    fn register(&mut self, key: &str, id: &GroupId) {
        self.keys
            .entry(key.to_lowercase())
            .or_insert_with(|| id.clone());
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Owner of an exact key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&GroupId> {
        self.keys.get(&key.to_lowercase())
    }

    /// All `(key, owner)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupId)> {
        self.keys.iter().map(|(k, id)| (k.as_str(), id))
    }

    /// Groups whose keys contain the query. Empty for an empty query.
    pub fn expansion_set(&self, query: &Query) -> HashSet<GroupId> {
        if query.is_empty() {
            return HashSet::new();
        }
        self.keys
            .iter()
            .filter(|(key, _)| key.contains(query.as_str()))
            .map(|(_, id)| id.clone())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Filtering
// ────────────────────────────────────────────────────────────────────────────

impl UtilityGroup {
    /// Whether this group survives filtering for `query`.
    pub fn matches_query(&self, query: &Query) -> bool {
        if query.is_empty() {
            return true;
        }
        query.matches(&self.title)
            || self
                .entries
                .iter()
                .any(|e| query.matches(&e.name) || query.matches(&e.css))
    }
}

impl Catalogue {
    /// Categories and groups that survive `query`, in catalogue order.
    pub fn filter(&self, query: &Query) -> Catalogue {
        if query.is_empty() {
            return self.clone();
        }
        let categories = self
            .categories
            .iter()
            .filter_map(|cat| {
                let groups: Vec<UtilityGroup> = cat
                    .groups
                    .iter()
                    .filter(|g| g.matches_query(query))
                    .cloned()
                    .collect();
                (!groups.is_empty()).then(|| Category {
                    title: cat.title.clone(),
                    color_tag: cat.color_tag.clone(),
                    groups,
                })
            })
            .collect();
        Catalogue::new(categories)
    }
}

/// Result of applying one query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub catalogue: Catalogue,
    pub expanded: HashSet<GroupId>,
}

impl SearchOutcome {
    pub fn is_expanded(&self, group: &UtilityGroup) -> bool {
        self.expanded.contains(&group.id())
    }
}

/// Run both passes for `query`.
pub fn search(catalogue: &Catalogue, index: &SearchIndex, query: &Query) -> SearchOutcome {
    let outcome = SearchOutcome {
        catalogue: catalogue.filter(query),
        expanded: index.expansion_set(query),
    };
    debug!(
        query = query.as_str(),
        categories = outcome.catalogue.categories.len(),
        expanded = outcome.expanded.len(),
        "query applied"
    );
    outcome
}

// ────────────────────────────────────────────────────────────────────────────
// Memoization
// ────────────────────────────────────────────────────────────────────────────

/// A [`SearchIndex`] tied to the catalogue it was built from.
///
/// [`MemoizedIndex::get`] rebuilds only when handed a different catalogue
/// allocation (`Arc` identity), so an unchanged session catalogue is indexed
/// once.
#[derive(Debug, Clone)]
pub struct MemoizedIndex {
    catalogue: Arc<Catalogue>,
    index: SearchIndex,
    builds: u32,
}

impl MemoizedIndex {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        let index = SearchIndex::build(&catalogue);
        Self {
            catalogue,
            index,
            builds: 1,
        }
    }

    pub fn get(&mut self, catalogue: &Arc<Catalogue>) -> &SearchIndex {
        if !Arc::ptr_eq(&self.catalogue, catalogue) {
            self.catalogue = Arc::clone(catalogue);
            self.index = SearchIndex::build(catalogue);
            self.builds += 1;
        }
        &self.index
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// How many times the index has been built.
    pub fn builds(&self) -> u32 {
        self.builds
    }
}
