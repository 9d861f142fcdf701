use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::task::Filter;

/// Configuration from config.toml in the data directory
///
/// Every field has a default, so a missing or partial file behaves like
/// the stock variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filter tab selected at startup
    #[serde(default)]
    pub default_filter: Filter,
    /// Ordering applied to the visible list
    #[serde(default)]
    pub sort: Sort,
    /// Stamp new tasks with a creation time and show a time column
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Write theme toggles back to storage
    #[serde(default = "default_true")]
    pub persist_theme: bool,
    #[serde(default)]
    pub colors: ColorOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_filter: Filter::All,
            sort: Sort::Insertion,
            timestamps: true,
            persist_theme: true,
            colors: ColorOverrides::default(),
        }
    }
}

/// List ordering variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    /// The order tasks were added in
    #[default]
    Insertion,
    /// Incomplete before completed, newest creation first within each group
    NewestFirst,
}

/// Per-theme palette overrides, hex strings keyed by palette field name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorOverrides {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_filter, Filter::All);
        assert_eq!(config.sort, Sort::Insertion);
        assert!(config.timestamps);
        assert!(config.persist_theme);
        assert!(config.colors.dark.is_empty());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("timestamps = false\n").unwrap();
        assert!(!config.timestamps);
        assert!(config.persist_theme);
        assert_eq!(config.sort, Sort::Insertion);
    }

    #[test]
    fn parses_every_variant_switch() {
        let config: Config = toml::from_str(
            r##"
default_filter = "active"
sort = "newest-first"
timestamps = false
persist_theme = false

[colors.dark]
accent = "#ffcc00"
"##,
        )
        .unwrap();
        assert_eq!(config.default_filter, Filter::Active);
        assert_eq!(config.sort, Sort::NewestFirst);
        assert!(!config.timestamps);
        assert!(!config.persist_theme);
        assert_eq!(config.colors.dark.get("accent").unwrap(), "#ffcc00");
    }

    #[test]
    fn unknown_sort_value_is_an_error() {
        assert!(toml::from_str::<Config>("sort = \"alphabetical\"\n").is_err());
    }
}
