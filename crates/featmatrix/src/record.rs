//! Entity records: the named subjects whose capabilities are tabulated.
//!
//! The features document is a JSON array of objects:
//!
//! ```json
//! [
//!   { "name": "Batman", "features": ["rich", "fly"] },
//!   { "name": "Superman", "features": ["fly", "strong"] }
//! ]
//! ```
//!
//! Each record is validated individually so a shape error names the record
//! it came from. Keys other than `name` and `features` are ignored.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// A named entity and the set of capability labels it has.
///
/// `features` is a set: duplicates in the source document collapse, and the
/// order they were listed in carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Row label. Not required to be unique.
    pub name: String,
    /// Capability labels this entity has.
    pub features: BTreeSet<String>,
}

impl EntityRecord {
    /// Creates a record from a name and any iterable of labels.
    pub fn new<I, S>(name: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this entity has the given capability label.
    pub fn has(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

/// Parses and validates a features document.
///
/// # Errors
///
/// Returns [`MatrixError::Json`] if the text is not JSON, and
/// [`MatrixError::Shape`] if the top level is not an array or any element
/// lacks a string `name` or a string-array `features`.
pub fn parse_records(text: &str) -> Result<Vec<EntityRecord>> {
    let document: serde_json::Value =
        serde_json::from_str(text).map_err(|source| MatrixError::Json { path: None, source })?;

    let items = match document {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(MatrixError::shape(format!(
                "expected a JSON array of entity records, found {}",
                kind_of(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item))
        .collect()
}

/// Reads and validates a features document from disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<EntityRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MatrixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text).map_err(|e| e.at_path(path))?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded entity records");
    Ok(records)
}

fn record_from_value(index: usize, item: serde_json::Value) -> Result<EntityRecord> {
    if !item.is_object() {
        return Err(MatrixError::shape(format!(
            "record {}: expected an object, found {}",
            index,
            kind_of(&item)
        )));
    }

    let label = item
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(|name| format!("record {} ({:?})", index, name))
        .unwrap_or_else(|| format!("record {}", index));

    serde_json::from_value(item).map_err(|e| MatrixError::shape(format!("{}: {}", label, e)))
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
