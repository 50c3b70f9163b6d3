//! The static plugin-name → option table.
//!
//! The built-in table is compiled into the binary from `overrides.yaml`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;

const BUILTIN_OVERRIDES: &str = include_str!("overrides.yaml");

/// Per-plugin options that replace a plugin's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginOverrides {
    options: BTreeMap<String, Value>,
}

impl PluginOverrides {
    /// An empty table: every plugin is emitted bare.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_OVERRIDES)
    }

    /// Parses a YAML map of plugin names to arbitrary option values.
    ///
    /// An empty or null document is an empty table.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: Option<BTreeMap<String, Value>> = serde_yaml::from_str(yaml)?;
        Ok(Self {
            options: options.unwrap_or_default(),
        })
    }

    /// Adds or replaces the option for `plugin`.
    pub fn insert(mut self, plugin: impl Into<String>, option: impl Into<Value>) -> Self {
        self.options.insert(plugin.into(), option.into());
        self
    }

    pub fn get(&self, plugin: &str) -> Option<&Value> {
        self.options.get(plugin)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_parses() {
        let overrides = PluginOverrides::builtin().unwrap();
        assert_eq!(overrides.len(), 9);
        assert_eq!(
            overrides.get("remark-lint-code-block-style"),
            Some(&json!("indented"))
        );
        assert_eq!(overrides.get("remark-lint-emphasis-marker"), Some(&json!("*")));
        assert_eq!(overrides.get("remark-lint-strong-marker"), Some(&json!("*")));
        assert_eq!(overrides.get("remark-lint-heading-style"), Some(&json!("atx")));
        assert_eq!(
            overrides.get("remark-lint-list-item-indent"),
            Some(&json!("space"))
        );
        assert_eq!(
            overrides.get("remark-lint-no-heading-punctuation"),
            Some(&json!(".,;:!"))
        );
        assert_eq!(
            overrides.get("remark-lint-unordered-list-marker-style"),
            Some(&json!("-"))
        );
        assert_eq!(
            overrides.get("remark-lint-no-dead-urls"),
            Some(&json!({"skipOffline": true}))
        );
        assert_eq!(
            overrides.get("remark-lint-no-missing-blank-lines"),
            Some(&json!({"exceptTightLists": true}))
        );
        assert_eq!(overrides.get("remark-lint-maximum-line-length"), None);
        assert_eq!(overrides.get("remark-lint-final-newline"), None);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert!(PluginOverrides::from_yaml("").unwrap().is_empty());
        assert!(PluginOverrides::from_yaml("# nothing\n").unwrap().is_empty());
        assert!(PluginOverrides::from_yaml("~\n").unwrap().is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_sequence() {
        assert!(PluginOverrides::from_yaml("- a\n- b\n").is_err());
    }

    #[test]
    fn test_insert_replaces() {
        let overrides = PluginOverrides::new()
            .insert("remark-lint-a", 1)
            .insert("remark-lint-a", "two");
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("remark-lint-a"), Some(&json!("two")));
    }
}
