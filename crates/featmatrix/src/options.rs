//! Render options and their defaults.
//!
//! [`RenderOptions`] names every input and output of a render run. All
//! fields have defaults, so a config document only needs the keys it wants
//! to change:
//!
//! ```yaml
//! featuresFile: docs/clients.json
//! svgResultsFile: docs/clients.svg
//! stylesFile: docs/clients.css
//! has: "yes"
//! hasNot: ""
//! ```
//!
//! Keys are camelCase. Unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MatrixError, Result};

/// Default path of the features document.
pub const DEFAULT_FEATURES_FILE: &str = "features.json";

/// Default path of the rendered image.
pub const DEFAULT_SVG_RESULTS_FILE: &str = "features.svg";

/// Default presence marker: heavy check mark with the emoji presentation
/// selector, "✔️".
pub const DEFAULT_HAS: &str = "\u{2714}\u{fe0f}";

/// Default absence marker, "❌".
pub const DEFAULT_HAS_NOT: &str = "\u{274c}";

/// Inputs and outputs of a single render run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// JSON array of entity records. Defaults to [`DEFAULT_FEATURES_FILE`].
    pub features_file: PathBuf,
    /// Cell content for a capability an entity has.
    pub has: String,
    /// Cell content for a capability an entity lacks.
    pub has_not: String,
    /// Where the rendered image is written. Overwritten if it exists.
    pub svg_results_file: PathBuf,
    /// Optional style document embedded in the image. `None` means no styling.
    pub styles_file: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            features_file: PathBuf::from(DEFAULT_FEATURES_FILE),
            has: DEFAULT_HAS.to_string(),
            has_not: DEFAULT_HAS_NOT.to_string(),
            svg_results_file: PathBuf::from(DEFAULT_SVG_RESULTS_FILE),
            styles_file: None,
        }
    }
}

impl RenderOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn features_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.features_file = path.into();
        self
    }

    pub fn has(mut self, marker: impl Into<String>) -> Self {
        self.has = marker.into();
        self
    }

    pub fn has_not(mut self, marker: impl Into<String>) -> Self {
        self.has_not = marker.into();
        self
    }

    pub fn svg_results_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.svg_results_file = path.into();
        self
    }

    pub fn styles_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.styles_file = Some(path.into());
        self
    }

    /// Parses options from YAML. JSON documents are accepted too.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| MatrixError::Config {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads options from a YAML or JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MatrixError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|e| e.at_path(path))
    }
}
