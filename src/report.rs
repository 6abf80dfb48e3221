//! Plain-text and JSON renderings of a [`SearchOutcome`], as printed by the
//! `tailsheet` binary.

use std::io::{self, Write};

use serde::Serialize;

use crate::docs::docs_url_with_base;
use crate::model::Category;
use crate::search::{Query, SearchOutcome};

/// Serializable summary of one query.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub query: &'a str,
    pub categories: &'a [Category],
    /// Expanded group identifiers, sorted.
    pub expanded: Vec<&'a str>,
}

impl<'a> JsonReport<'a> {
    pub fn new(query: &'a Query, outcome: &'a SearchOutcome) -> Self {
        let mut expanded: Vec<&str> = outcome.expanded.iter().map(|id| id.as_str()).collect();
        expanded.sort_unstable();
        Self {
            query: query.as_str(),
            categories: &outcome.catalogue.categories,
            expanded,
        }
    }
}

/// Write the filtered catalogue as an indented outline.
///
/// Expanded groups are marked `[+]` and list their entries; collapsed groups
/// are marked `[-]` and show only their title.
pub fn write_text<W: Write>(out: &mut W, outcome: &SearchOutcome, docs_base: &str) -> io::Result<()> {
    let categories = &outcome.catalogue.categories;
    if categories.is_empty() {
        return writeln!(out, "No matching utilities.");
    }
    for cat in categories {
        writeln!(out, "{} ({})", cat.title, cat.color_tag)?;
        for g in &cat.groups {
            if !outcome.is_expanded(g) {
                writeln!(out, "  [-] {}", g.title)?;
                continue;
            }
            writeln!(out, "  [+] {}  {}", g.title, docs_url_with_base(docs_base, &g.title))?;
            if let Some(d) = &g.description {
                writeln!(out, "      {}", d)?;
            }
            let width = g.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
            for e in &g.entries {
                match &e.annotation {
                    Some(v) => writeln!(out, "      {:width$}  {}  ({})", e.name, e.css, v)?,
                    None => writeln!(out, "      {:width$}  {}", e.name, e.css)?,
                }
            }
        }
    }
    Ok(())
}
