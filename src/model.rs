use serde::{Deserialize, Serialize};

use crate::docs;

// ────────────────────────────────────────────────────────────────────────────
// Catalogue
// ────────────────────────────────────────────────────────────────────────────

/// The normalized cheatsheet: categories → utility groups → class entries.
///
/// Built once per session and shared read-only (usually behind an `Arc`).
/// Order is meaningful everywhere; nothing is re-sorted after building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub categories: Vec<Category>,
}

impl Catalogue {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of utility groups across all categories.
    pub fn group_count(&self) -> usize {
        self.categories.iter().map(|c| c.groups.len()).sum()
    }

    /// Number of class entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups().map(|g| g.entries.len()).sum()
    }

    /// Iterate every utility group in catalogue order.
    pub fn groups(&self) -> impl Iterator<Item = &UtilityGroup> {
        self.categories.iter().flat_map(|c| c.groups.iter())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// A titled card of utility groups (e.g. "Spacing").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// Gradient descriptor such as `"from-blue-500 to-cyan-500"`.
    /// See [`crate::color`] for resolving it to RGB stops.
    pub color_tag: String,
    pub groups: Vec<UtilityGroup>,
}

// ────────────────────────────────────────────────────────────────────────────
// UtilityGroup
// ────────────────────────────────────────────────────────────────────────────

/// A named cluster of related utility classes (e.g. "padding").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityGroup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub entries: Vec<ClassEntry>,
}

impl UtilityGroup {
    /// Identifier used by the search index and the expansion set.
    ///
    /// Formed by concatenating title and description, so two groups sharing
    /// both collapse onto the same identifier.
    pub fn id(&self) -> GroupId {
        GroupId::new(&self.title, self.description.as_deref())
    }

    /// Title and description concatenated; the group's own search-index key
    /// before lowercasing.
    pub fn key_text(&self) -> String {
        let mut s = self.title.clone();
        if let Some(d) = &self.description {
            s.push_str(d);
        }
        s
    }

    /// Link to the upstream documentation page for this utility.
    pub fn docs_url(&self) -> String {
        docs::docs_url(&self.title)
    }
}

/// Identifier of a [`UtilityGroup`] inside the search index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        let mut s = String::with_capacity(title.len() + description.map_or(0, str::len));
        s.push_str(title);
        if let Some(d) = description {
            s.push_str(d);
        }
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ClassEntry
// ────────────────────────────────────────────────────────────────────────────

/// One concrete selector and its declaration (e.g. `.p-4` → `padding: 1rem;`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// CSS selector including the leading dot.
    pub name: String,
    /// Declaration block text.
    pub css: String,
    /// Optional resolved value shown next to the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl ClassEntry {
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}
