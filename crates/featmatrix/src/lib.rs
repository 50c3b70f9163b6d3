//! # featmatrix - capability matrices as SVG
//!
//! `featmatrix` reads a list of named entities (typically clients of some
//! protocol or library), each tagged with the capability labels it
//! supports, and renders a "who supports what" matrix as an SVG image.
//!
//! ## Core Concepts
//!
//! - [`EntityRecord`]: a name plus a set of capability labels
//! - [`build`]: turns records into a rectangular [`Table`] of [`Cell`]s
//! - [`TableRenderer`]: turns a table and optional style text into image bytes
//! - [`SvgRenderer`]: the built-in renderer
//! - [`RenderOptions`]: where to read from and write to, and which markers to use
//! - [`render_features`]: the whole read → build → render → write pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use featmatrix::{build, parse_records};
//!
//! let records = parse_records(r#"[
//!     {"name": "Batman", "features": ["rich", "fly"]},
//!     {"name": "Superman", "features": ["fly", "strong"]}
//! ]"#).unwrap();
//!
//! let table = build(&records, "yes", "no");
//! assert_eq!(table.to_grid()[0], vec!["", "fly", "rich", "strong"]);
//! assert_eq!(table.to_grid()[2], vec!["Superman", "yes", "no", "yes"]);
//! ```
//!
//! ## Rendering To A File
//!
//! ```rust,no_run
//! use featmatrix::{render_features, RenderOptions};
//!
//! let options = RenderOptions::new()
//!     .features_file("docs/clients.json")
//!     .svg_results_file("docs/clients.svg")
//!     .styles_file("docs/clients.css");
//!
//! render_features(&options)?;
//! # Ok::<(), featmatrix::MatrixError>(())
//! ```
//!
//! Columns are the sorted union of every label, so the output is
//! reproducible for a given input. Rows keep the order of the input file.

mod error;
pub mod options;
mod orchestrate;
pub mod record;
pub mod render;
pub mod table;

pub use error::{MatrixError, Result};

pub use options::{
    RenderOptions, DEFAULT_FEATURES_FILE, DEFAULT_HAS, DEFAULT_HAS_NOT, DEFAULT_SVG_RESULTS_FILE,
};

pub use orchestrate::{render_features, render_features_with, RenderSummary};

pub use record::{load_records, parse_records, EntityRecord};

pub use render::{RenderError, SvgLayout, SvgRenderer, TableRenderer};

pub use table::{build, capability_universe, Cell, Table};
