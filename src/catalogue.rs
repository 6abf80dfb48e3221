//! Building the normalized [`Catalogue`] from raw source records.
//!
//! ```rust,ignore
//! use tailsheet::catalogue::CatalogueBuilder;
//! use tailsheet::source::RawSource;
//!
//! let raw = RawSource::from_path("data/cheatsheet.json".into())?;
//! let catalogue = CatalogueBuilder::new().build(&raw);
//! ```

use camino::Utf8Path;
use tracing::{info, warn};

use crate::builtin::builtin_categories;
use crate::color::color_tag_for;
use crate::config::SheetConfig;
use crate::docs::kebab_case;
use crate::error::Result;
use crate::model::{Catalogue, Category, ClassEntry, UtilityGroup};
use crate::source::{RawCategory, RawRow, RawSource, RawUtility};

/// Number of leading source categories already covered by the built-ins.
pub const DEFAULT_SKIP_LEADING: usize = 3;

/// Turns [`RawSource`] records into a [`Catalogue`].
///
/// Building never fails: missing text becomes empty, rows without a
/// declaration are discarded, and empty groups and categories are dropped.
#[derive(Debug, Clone)]
pub struct CatalogueBuilder {
    skip_leading: usize,
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self {
            skip_leading: DEFAULT_SKIP_LEADING,
        }
    }
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override how many leading source categories are ignored.
    pub fn skip_leading(mut self, n: usize) -> Self {
        self.skip_leading = n;
        self
    }

    pub fn build(&self, raw: &RawSource) -> Catalogue {
        if !raw.categories.is_empty() && raw.categories.len() <= self.skip_leading {
            warn!(
                available = raw.categories.len(),
                skip = self.skip_leading,
                "skip offset covers every source category"
            );
        }
        let categories = raw
            .categories
            .iter()
            .skip(self.skip_leading)
            .filter_map(build_category)
            .collect();
        Catalogue::new(categories)
    }
}

fn build_category(raw: &RawCategory) -> Option<Category> {
    let groups: Vec<UtilityGroup> = raw
        .children
        .iter()
        .filter(|child| !child.table.is_empty())
        .filter_map(build_group)
        .collect();
    if groups.is_empty() {
        return None;
    }
    let title = raw.title.trim().to_string();
    Some(Category {
        color_tag: color_tag_for(&title).to_string(),
        title,
        groups,
    })
}

fn build_group(raw: &RawUtility) -> Option<UtilityGroup> {
    let title = raw.title.trim();
    let entries: Vec<ClassEntry> = raw
        .table
        .iter()
        .filter_map(|row| build_entry(row, title))
        .collect();
    if entries.is_empty() {
        return None;
    }
    Some(UtilityGroup {
        title: title.to_string(),
        description: non_empty(&raw.description),
        entries,
    })
}

fn build_entry(row: &RawRow, group_title: &str) -> Option<ClassEntry> {
    let css = row.properties.trim();
    if css.is_empty() {
        return None;
    }
    let name = match row.class.trim() {
        "" => synthetic_class_name(group_title),
        class => class.to_string(),
    };
    Some(ClassEntry {
        name,
        css: css.to_string(),
        annotation: non_empty(&row.value),
    })
}

/// Class name used for rows that carry no `class` of their own.
pub fn synthetic_class_name(group_title: &str) -> String {
    format!(".{}", kebab_case(group_title))
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

impl Catalogue {
    /// Built-in categories first, then `built`.
    pub fn with_builtin(built: Catalogue) -> Catalogue {
        let mut categories = builtin_categories().to_vec();
        categories.extend(built.categories);
        Catalogue::new(categories)
    }
}

/// Load, build and assemble the session catalogue.
///
/// The only failures are an unreadable or unparsable data file.
pub fn load_catalogue(path: &Utf8Path, config: &SheetConfig) -> Result<Catalogue> {
    let raw = RawSource::from_path(path)?;
    let built = CatalogueBuilder::new()
        .skip_leading(config.skip_leading)
        .build(&raw);
    let catalogue = if config.include_builtin {
        Catalogue::with_builtin(built)
    } else {
        built
    };
    info!(
        path = %path,
        categories = catalogue.categories.len(),
        groups = catalogue.group_count(),
        entries = catalogue.entry_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(class: &str, properties: &str, value: &str) -> RawRow {
        RawRow {
            class: class.into(),
            properties: properties.into(),
            value: value.into(),
        }
    }

    #[test]
    fn entry_without_class_gets_synthetic_name() {
        let e = build_entry(&row("", "z-index: 0;", ""), "Z-Index").unwrap();
        assert_eq!(e.name, ".z-index");
        assert_eq!(e.annotation, None);
    }

    #[test]
    fn entry_with_blank_declaration_is_discarded() {
        assert!(build_entry(&row(".x", "   ", "1px"), "X").is_none());
    }

    #[test]
    fn entry_values_are_trimmed() {
        let e = build_entry(&row(" .m-1 ", " margin: 0.25rem; ", " 4px "), "Margin").unwrap();
        assert_eq!(e.name, ".m-1");
        assert_eq!(e.css, "margin: 0.25rem;");
        assert_eq!(e.annotation.as_deref(), Some("4px"));
    }
}
