//! Tabbed view configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabkit_tabs::{ActivationMode, ViewOptions};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accessible label of the tab strip
    pub view_label: String,
    /// Whether arrow keys activate tabs or only move focus
    pub activation: ActivationMode,
    /// Prefix of generated tab button ids
    pub tab_id_prefix: String,
    /// Prefix of generated panel ids
    pub panel_id_prefix: String,
    /// Move focus into the panel on activation
    pub focus_panel_on_activate: bool,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        self.view_options()
            .validate()
            .map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            view_label: self.view_label.clone(),
            activation: self.activation,
            tab_id_prefix: self.tab_id_prefix.clone(),
            panel_id_prefix: self.panel_id_prefix.clone(),
            focus_panel_on_activate: self.focus_panel_on_activate,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let view = ViewOptions::default();
        Self {
            view_label: view.view_label,
            activation: view.activation,
            tab_id_prefix: view.tab_id_prefix,
            panel_id_prefix: view.panel_id_prefix,
            focus_panel_on_activate: view.focus_panel_on_activate,
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.view_label, "Tabs");
        assert_eq!(config.activation, ActivationMode::Manual);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json_str(r#"{"view_label": "Learner Profile"}"#).unwrap();
        assert_eq!(config.view_label, "Learner Profile");
        assert_eq!(config.panel_id_prefix, "tabpanel-");
        assert!(config.focus_panel_on_activate);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(CoreError::Serialization(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"activation": "sometimes"}"#),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            Config::from_json_str(r#"{"tab_id_prefix": "tab "}"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"tab_id_prefix": "x-", "panel_id_prefix": "x-"}"#),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/tabkit/config.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("tabkit-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"activation": "automatic", "log_filter": "debug"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.activation, ActivationMode::Automatic);
        assert_eq!(config.log_filter, "debug");

        std::fs::remove_file(&path).unwrap();
    }
}
