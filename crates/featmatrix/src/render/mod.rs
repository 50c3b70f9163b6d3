//! Table renderers.
//!
//! A renderer turns a finished [`Table`] plus an optional, opaque style
//! document into the bytes of an image. [`SvgRenderer`] is the built-in
//! implementation; anything implementing [`TableRenderer`] can be handed to
//! [`render_features_with`](crate::render_features_with).

mod svg;

use std::fmt;

use thiserror::Error;

use crate::table::Table;

pub use svg::{SvgLayout, SvgRenderer};

/// Error type for renderer failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The XML writer rejected an event.
    #[error("failed to write SVG markup: {0}")]
    Xml(String),

    /// Any other renderer-specific failure.
    #[error("render failed: {0}")]
    Other(String),
}

/// Converts a table and optional style text into serialized image content.
pub trait TableRenderer {
    /// Renders `table`. `style` is passed through untouched when present.
    fn render<M: fmt::Display>(
        &self,
        table: &Table<M>,
        style: Option<&str>,
    ) -> Result<Vec<u8>, RenderError>;
}

impl<R: TableRenderer> TableRenderer for &R {
    fn render<M: fmt::Display>(
        &self,
        table: &Table<M>,
        style: Option<&str>,
    ) -> Result<Vec<u8>, RenderError> {
        (**self).render(table, style)
    }
}
