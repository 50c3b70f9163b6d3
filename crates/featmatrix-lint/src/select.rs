//! Plugin selection.
//!
//! Every dependency whose name starts with one of the plugin prefixes
//! becomes a plugin entry. Entries with an override carry their option:
//!
//! ```json
//! {
//!   "plugins": [
//!     "remark-lint",
//!     ["remark-lint-list-item-indent", "space"],
//!     "remark-validate-links"
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::manifest::read_manifest_dependencies;
use crate::overrides::PluginOverrides;

/// Prefixes recognized as lint plugins when no others are given.
///
/// The bare `remark-lint` core and the `remark-validate-*` checkers match;
/// presets such as `remark-preset-lint-recommended` do not.
pub const DEFAULT_PLUGIN_PREFIXES: &[&str] = &["remark-lint", "remark-validate"];

/// Decides which dependency names are lint plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginFilter {
    prefixes: Vec<String>,
}

impl Default for PluginFilter {
    fn default() -> Self {
        Self::new(DEFAULT_PLUGIN_PREFIXES.iter().copied())
    }
}

impl PluginFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `name` starts with any plugin prefix.
    pub fn matches(&self, name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }
}

/// One entry of the linter's plugin list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginSetting {
    /// Plugin used with its defaults: `"name"`.
    Name(String),
    /// Plugin with an option: `["name", option]`.
    Configured(String, Value),
}

impl PluginSetting {
    pub fn name(&self) -> &str {
        match self {
            PluginSetting::Name(name) | PluginSetting::Configured(name, _) => name,
        }
    }

    pub fn option(&self) -> Option<&Value> {
        match self {
            PluginSetting::Name(_) => None,
            PluginSetting::Configured(_, option) => Some(option),
        }
    }
}

/// Picks the plugins out of `dependencies`, keeping their order.
pub fn select_plugins<I, S>(
    dependencies: I,
    filter: &PluginFilter,
    overrides: &PluginOverrides,
) -> Vec<PluginSetting>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dependencies
        .into_iter()
        .filter(|name| filter.matches(name.as_ref()))
        .map(|name| {
            let name = name.as_ref();
            match overrides.get(name) {
                Some(option) => PluginSetting::Configured(name.to_string(), option.clone()),
                None => PluginSetting::Name(name.to_string()),
            }
        })
        .collect()
}

/// A linter configuration document (the contents of a `.remarkrc`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LintConfig {
    pub plugins: Vec<PluginSetting>,
}

impl LintConfig {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the configuration for the manifest at `path` using the default
/// prefixes and the built-in override table.
pub fn build_lint_config(path: impl AsRef<Path>) -> Result<LintConfig> {
    build_lint_config_with(path, &PluginFilter::default(), &PluginOverrides::builtin()?)
}

/// Builds the configuration for the manifest at `path`.
pub fn build_lint_config_with(
    path: impl AsRef<Path>,
    filter: &PluginFilter,
    overrides: &PluginOverrides,
) -> Result<LintConfig> {
    let dependencies = read_manifest_dependencies(path)?;
    let plugins = select_plugins(&dependencies, filter, overrides);
    tracing::debug!(
        dependencies = dependencies.len(),
        plugins = plugins.len(),
        "selected lint plugins"
    );
    Ok(LintConfig { plugins })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_default_prefixes() {
        let filter = PluginFilter::default();
        assert!(filter.matches("remark-lint"));
        assert!(filter.matches("remark-lint-final-newline"));
        assert!(filter.matches("remark-validate-links"));
        assert!(!filter.matches("remark-preset-lint-recommended"));
        assert!(!filter.matches("remark-cli"));
        assert!(!filter.matches("eslint-plugin-remark-lint-x"));
    }

    #[test]
    fn test_select_core_and_validators_but_not_presets() {
        let plugins = select_plugins(
            [
                "remark-lint",
                "remark-validate-links",
                "remark-preset-lint-recommended",
                "remark-lint-final-newline",
            ],
            &PluginFilter::default(),
            &PluginOverrides::new(),
        );
        let names: Vec<&str> = plugins.iter().map(PluginSetting::name).collect();
        assert_eq!(
            names,
            vec!["remark-lint", "remark-validate-links", "remark-lint-final-newline"]
        );
    }

    #[test]
    fn test_select_with_builtin_overrides() {
        let plugins = select_plugins(
            ["remark-lint", "remark-lint-heading-style", "remark-lint-no-dead-urls"],
            &PluginFilter::default(),
            &PluginOverrides::builtin().unwrap(),
        );
        assert_eq!(
            plugins,
            vec![
                PluginSetting::Name("remark-lint".into()),
                PluginSetting::Configured("remark-lint-heading-style".into(), json!("atx")),
                PluginSetting::Configured(
                    "remark-lint-no-dead-urls".into(),
                    json!({"skipOffline": true})
                ),
            ]
        );
    }

    #[test]
    fn test_filter_custom_prefixes() {
        let filter = PluginFilter::new(["textlint-rule-"]);
        assert!(filter.matches("textlint-rule-no-todo"));
        assert!(!filter.matches("remark-lint-final-newline"));
    }

    #[test]
    fn test_select_preserves_order_and_applies_overrides() {
        let overrides = PluginOverrides::new().insert("remark-lint-b", "x");
        let plugins = select_plugins(
            ["remark-lint-c", "lodash", "remark-lint-b", "remark-lint-a"],
            &PluginFilter::default(),
            &overrides,
        );
        assert_eq!(
            plugins,
            vec![
                PluginSetting::Name("remark-lint-c".into()),
                PluginSetting::Configured("remark-lint-b".into(), json!("x")),
                PluginSetting::Name("remark-lint-a".into()),
            ]
        );
    }

    #[test]
    fn test_select_ignores_overrides_for_absent_plugins() {
        let overrides = PluginOverrides::new().insert("remark-lint-unused", true);
        let plugins = select_plugins(
            Vec::<String>::new(),
            &PluginFilter::default(),
            &overrides,
        );
        assert!(plugins.is_empty());
    }

    #[test]
    fn test_setting_serializes_as_name_or_pair() {
        let config = LintConfig {
            plugins: vec![
                PluginSetting::Name("remark-lint-a".into()),
                PluginSetting::Configured("remark-lint-b".into(), json!({"max": 3})),
            ],
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"plugins": ["remark-lint-a", ["remark-lint-b", {"max": 3}]]})
        );
    }

    #[test]
    fn test_setting_accessors() {
        let bare = PluginSetting::Name("a".into());
        let configured = PluginSetting::Configured("b".into(), json!(false));
        assert_eq!(bare.name(), "a");
        assert_eq!(bare.option(), None);
        assert_eq!(configured.name(), "b");
        assert_eq!(configured.option(), Some(&json!(false)));
    }
}
