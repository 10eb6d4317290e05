//! CSS-классы панели вкладок.
//!
//! Значения по умолчанию совпадают с разметкой Bootstrap (`nav nav-tabs`),
//! поэтому существующие стили работают без настройки.

use anyhow::Context;
use serde::Deserialize;

/// Class names applied to the container, the tab strip and its links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabClasses {
    pub container: String,
    pub tab_list: String,
    pub tab_item: String,
    pub tab_link: String,
    pub active_tab_link: String,
}

impl Default for TabClasses {
    fn default() -> Self {
        Self {
            container: String::new(),
            tab_list: "nav nav-tabs".to_string(),
            tab_item: "nav-item".to_string(),
            tab_link: "nav-link".to_string(),
            active_tab_link: "nav-link active".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[tabs]
container = ""
tab_list = "nav nav-tabs"
tab_item = "nav-item"
tab_link = "nav-link"
active_tab_link = "nav-link active"
"#;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tabs: TabClasses,
}

impl TabClasses {
    /// Parse class names from the `[tabs]` table of a TOML document.
    ///
    /// Missing keys (or a missing table) keep their default values.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).context("failed to parse tab class configuration")?;
        Ok(file.tabs)
    }

    /// Link class for a tab in the given state.
    pub fn link_class(&self, active: bool) -> &str {
        if active {
            &self.active_tab_link
        } else {
            &self.tab_link
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default() {
        let classes = TabClasses::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(classes, TabClasses::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let classes = TabClasses::from_toml_str(
            r#"
[tabs]
container = "card"
active_tab_link = "nav-link active fw-bold"
"#,
        )
        .unwrap();
        assert_eq!(classes.container, "card");
        assert_eq!(classes.active_tab_link, "nav-link active fw-bold");
        assert_eq!(classes.tab_list, "nav nav-tabs");
        assert_eq!(classes.tab_link, "nav-link");
    }

    #[test]
    fn test_missing_table_yields_defaults() {
        let classes = TabClasses::from_toml_str("").unwrap();
        assert_eq!(classes, TabClasses::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = TabClasses::from_toml_str("[tabs\ncontainer = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_link_class() {
        let classes = TabClasses::default();
        assert_eq!(classes.link_class(true), "nav-link active");
        assert_eq!(classes.link_class(false), "nav-link");
    }
}
