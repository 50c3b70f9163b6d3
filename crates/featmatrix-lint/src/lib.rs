//! # featmatrix-lint - remark-lint plugin lists from `package.json`
//!
//! Documentation sites usually install their remark-lint rules as npm
//! dependencies. This crate turns that dependency list into the `plugins`
//! array of a remark configuration, so adding a rule is a single
//! `npm install`.
//!
//! - [`read_manifest_dependencies`]: dependency names in manifest order
//! - [`PluginFilter`]: which names are plugins (by prefix)
//! - [`PluginOverrides`]: static name → option table
//! - [`select_plugins`]: filter and attach options
//! - [`build_lint_config`]: all of the above for one manifest
//!
//! ```rust
//! use featmatrix_lint::{select_plugins, PluginFilter, PluginOverrides, PluginSetting};
//!
//! let overrides = PluginOverrides::new().insert("remark-lint-list-item-indent", "space");
//! let plugins = select_plugins(
//!     ["remark-cli", "remark-lint", "remark-lint-list-item-indent"],
//!     &PluginFilter::default(),
//!     &overrides,
//! );
//!
//! assert_eq!(plugins[0], PluginSetting::Name("remark-lint".into()));
//! assert_eq!(plugins[1].option(), Some(&serde_json::json!("space")));
//! ```

mod error;
mod manifest;
mod overrides;
mod select;

pub use error::{LintConfigError, Result};
pub use manifest::{parse_manifest_dependencies, read_manifest_dependencies};
pub use overrides::PluginOverrides;
pub use select::{
    build_lint_config, build_lint_config_with, select_plugins, LintConfig, PluginFilter,
    PluginSetting, DEFAULT_PLUGIN_PREFIXES,
};
