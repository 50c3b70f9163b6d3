//! Capability table construction.
//!
//! [`build`] turns a list of [`EntityRecord`]s into a rectangular grid:
//!
//! ```text
//!            | fly | rich | strong
//! Batman     | yes | yes  | no
//! Superman   | yes | no   | yes
//! ```
//!
//! Row 0 is the header. Its first cell is empty and the remaining cells are
//! the capability universe (every label any entity has) in ascending
//! codepoint order. Each following row belongs to one entity, in input
//! order: the entity name, then one marker per header label.
//!
//! # Example
//!
//! ```rust
//! use featmatrix::{build, EntityRecord};
//!
//! let entities = vec![
//!     EntityRecord::new("Batman", ["rich", "fly"]),
//!     EntityRecord::new("Superman", ["fly", "strong"]),
//! ];
//!
//! let table = build(&entities, "yes", "no");
//! assert_eq!(
//!     table.to_grid(),
//!     vec![
//!         vec!["", "fly", "rich", "strong"],
//!         vec!["Batman", "yes", "yes", "no"],
//!         vec!["Superman", "yes", "no", "yes"],
//!     ]
//! );
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::record::EntityRecord;

/// A single table cell.
///
/// Header labels, entity names and the empty corner are [`Cell::Text`].
/// Marker cells keep the caller's value untouched and remember which marker
/// they hold so renderers can style them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell<M> {
    Text(String),
    Present(M),
    Absent(M),
}

impl<M> Cell<M> {
    /// Returns the marker value, or `None` for text cells.
    pub fn marker(&self) -> Option<&M> {
        match self {
            Cell::Text(_) => None,
            Cell::Present(m) | Cell::Absent(m) => Some(m),
        }
    }

    /// Returns true for a presence marker.
    pub fn is_present(&self) -> bool {
        matches!(self, Cell::Present(_))
    }
}

impl<M: fmt::Display> fmt::Display for Cell<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Present(m) | Cell::Absent(m) => fmt::Display::fmt(m, f),
        }
    }
}

/// A rectangular, row-major capability table.
///
/// Constructed only by [`build`], which guarantees every row has
/// `1 + features().len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table<M> {
    rows: Vec<Vec<Cell<M>>>,
}

impl<M> Table<M> {
    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<Cell<M>>] {
        &self.rows
    }

    /// The header row.
    pub fn header(&self) -> &[Cell<M>] {
        &self.rows[0]
    }

    /// Entity rows, in input order.
    pub fn body(&self) -> &[Vec<Cell<M>>] {
        &self.rows[1..]
    }

    /// The sorted capability labels, i.e. the header without its corner cell.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.header()[1..].iter().filter_map(|cell| match cell {
            Cell::Text(label) => Some(label.as_str()),
            _ => None,
        })
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in every row.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<Cell<M>>> {
        self.rows
    }
}

impl<M: fmt::Display> Table<M> {
    /// Renders every cell with `Display`.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

/// Collects the capability universe: every label of every entity, once,
/// in ascending order.
pub fn capability_universe(entities: &[EntityRecord]) -> BTreeSet<&str> {
    entities
        .iter()
        .flat_map(|entity| entity.features.iter().map(String::as_str))
        .collect()
}

/// Builds the capability table for `entities`.
///
/// `present` and `absent` are copied verbatim into marker cells. Entity rows
/// keep the input order; only the columns are sorted. This is a pure
/// function of its inputs.
pub fn build<M: Clone>(entities: &[EntityRecord], present: M, absent: M) -> Table<M> {
    let universe = capability_universe(entities);

    let mut rows = Vec::with_capacity(entities.len() + 1);

    let mut header = Vec::with_capacity(universe.len() + 1);
    header.push(Cell::Text(String::new()));
    header.extend(universe.iter().map(|label| Cell::Text((*label).to_string())));
    rows.push(header);

    for entity in entities {
        let mut row = Vec::with_capacity(universe.len() + 1);
        row.push(Cell::Text(entity.name.clone()));
        row.extend(universe.iter().map(|label| {
            if entity.has(label) {
                Cell::Present(present.clone())
            } else {
                Cell::Absent(absent.clone())
            }
        }));
        rows.push(row);
    }

    Table { rows }
}
