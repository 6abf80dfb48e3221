//! Raw cheatsheet data as it appears in the static JSON file.
//!
//! The file is an array of categories, each holding child utilities with an
//! optional `table` of rows:
//!
//! ```json
//! [{ "title": "Spacing",
//!    "children": [{ "title": "Padding", "description": "…",
//!                   "table": [{ "class": ".p-4", "properties": "padding: 1rem;", "value": "16px" }] }] }]
//! ```
//!
//! Everything below the top-level array is read leniently: wrong types and
//! missing keys turn into empty values so that a single bad record never
//! fails the load. Rows are also accepted in positional form
//! (`[class, properties, value]`).

use camino::Utf8Path;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SheetError};

/// The whole data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSource {
    pub categories: Vec<RawCategory>,
}

/// A top-level record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub children: Vec<RawUtility>,
}

/// A child node of a category; becomes a utility group when it has rows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawUtility {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub table: Vec<RawRow>,
}

/// One `class` / `properties` / `value` triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub class: String,
    pub properties: String,
    pub value: String,
}

impl RawRow {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                class: map.get("class").map(scalar_text).unwrap_or_default(),
                properties: map.get("properties").map(scalar_text).unwrap_or_default(),
                value: map.get("value").map(scalar_text).unwrap_or_default(),
            },
            Value::Array(cells) => {
                let cell = |i: usize| cells.get(i).map(scalar_text).unwrap_or_default();
                Self {
                    class: cell(0),
                    properties: cell(1),
                    value: cell(2),
                }
            }
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl RawSource {
    /// Parse the data file contents. `origin` names the source in errors.
    ///
    /// Only a non-JSON input or a top-level value that is not an array is an
    /// error; individual records that fail to decode become empty defaults
    /// and keep their position (the builder's skip offset counts them).
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self> {
        let items: Vec<Value> = serde_json::from_str(text).map_err(|source| SheetError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let categories: Vec<RawCategory> = items.into_iter().map(decode_or_default).collect();
        debug!(origin, categories = categories.len(), "parsed raw catalogue source");
        Ok(Self { categories })
    }

    /// Read and parse a data file from disk.
    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SheetError::Missing {
                    path: path.to_owned(),
                }
            } else {
                SheetError::Io {
                    path: path.to_owned(),
                    source,
                }
            }
        })?;
        Self::from_json_str(&text, path.as_str())
    }
}

/// Render a JSON scalar as text; containers and null become "".
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(decode_or_default).collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_text_stringifies_numbers_and_drops_containers() {
        assert_eq!(scalar_text(&Value::from(12)), "12");
        assert_eq!(scalar_text(&Value::from(true)), "true");
        assert_eq!(scalar_text(&Value::Null), "");
        assert_eq!(scalar_text(&serde_json::json!({ "a": 1 })), "");
    }

    #[test]
    fn positional_rows_fill_missing_cells_with_empty_text() {
        let row = RawRow::from_value(&serde_json::json!([".m-0"]));
        assert_eq!(row.class, ".m-0");
        assert_eq!(row.properties, "");
        assert_eq!(row.value, "");
    }

    #[test]
    fn non_object_category_keeps_its_slot() {
        let src = RawSource::from_json_str(r#"[42, {"title": "Layout"}]"#, "test").unwrap();
        assert_eq!(src.categories.len(), 2);
        assert_eq!(src.categories[0], RawCategory::default());
        assert_eq!(src.categories[1].title, "Layout");
    }
}
