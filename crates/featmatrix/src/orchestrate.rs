//! Read, build, render, write.
//!
//! [`render_features`] is the whole pipeline in one call: it reads the
//! features document named by [`RenderOptions`], builds the capability
//! table, renders it with [`SvgRenderer`] and writes the result, replacing
//! whatever was at the output path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MatrixError, Result};
use crate::options::RenderOptions;
use crate::record::load_records;
use crate::render::{SvgRenderer, TableRenderer};
use crate::table::build;

/// What a render run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Path the image was written to.
    pub output: PathBuf,
    /// Number of entity rows (header excluded).
    pub entities: usize,
    /// Number of capability columns (row-label column excluded).
    pub features: usize,
    /// Size of the written image.
    pub bytes: usize,
}

/// Runs the pipeline with the built-in SVG renderer.
///
/// ```rust,no_run
/// use featmatrix::{render_features, RenderOptions};
///
/// // Reads ./features.json and writes ./features.svg
/// let summary = render_features(&RenderOptions::default())?;
/// println!("{} clients, {} features", summary.entities, summary.features);
/// # Ok::<(), featmatrix::MatrixError>(())
/// ```
pub fn render_features(options: &RenderOptions) -> Result<RenderSummary> {
    render_features_with(&SvgRenderer::default(), options)
}

/// Runs the pipeline with a caller-supplied renderer.
///
/// # Errors
///
/// Fails if the features document is missing, unreadable, not JSON or not
/// shaped like a list of entity records; if a styles file is configured but
/// cannot be read; if the renderer fails; or if the output cannot be
/// written. Nothing is written unless every earlier step succeeded.
pub fn render_features_with<R: TableRenderer>(
    renderer: &R,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    let records = load_records(&options.features_file)?;
    let style = options
        .styles_file
        .as_deref()
        .map(read_style)
        .transpose()?;

    let table = build(&records, options.has.as_str(), options.has_not.as_str());
    let image = renderer.render(&table, style.as_deref())?;

    let output = &options.svg_results_file;
    fs::write(output, &image).map_err(|source| MatrixError::Write {
        path: output.clone(),
        source,
    })?;

    let summary = RenderSummary {
        output: output.clone(),
        entities: records.len(),
        features: table.column_count() - 1,
        bytes: image.len(),
    };
    tracing::info!(
        output = %summary.output.display(),
        entities = summary.entities,
        features = summary.features,
        bytes = summary.bytes,
        "wrote capability matrix"
    );
    Ok(summary)
}

fn read_style(path: &Path) -> Result<String> {
    let style = fs::read_to_string(path).map_err(|source| MatrixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = style.len(), "loaded style document");
    Ok(style)
}
