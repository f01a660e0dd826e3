//! View options

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// When a tab becomes active during keyboard navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
    /// Arrow keys move focus only; Enter/Space or a click activates
    #[default]
    Manual,
    /// Arrow keys activate the tab they move focus to
    Automatic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Accessible label of the tab strip
    pub view_label: String,
    pub activation: ActivationMode,
    /// Prefix of generated tab button ids
    pub tab_id_prefix: String,
    /// Prefix of generated panel ids
    pub panel_id_prefix: String,
    /// Move focus into the panel when a tab is activated
    pub focus_panel_on_activate: bool,
}

impl ViewOptions {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            view_label: label.into(),
            ..Default::default()
        }
    }

    /// Id prefixes must be usable in `id` attributes and must not collide
    pub fn validate(&self) -> Result<()> {
        for (name, prefix) in [
            ("tab_id_prefix", &self.tab_id_prefix),
            ("panel_id_prefix", &self.panel_id_prefix),
        ] {
            if prefix.chars().any(char::is_whitespace) {
                return Err(TabError::InvalidOptions(format!(
                    "{} must not contain whitespace: '{}'",
                    name, prefix
                )));
            }
        }
        if self.tab_id_prefix == self.panel_id_prefix {
            return Err(TabError::InvalidOptions(
                "tab_id_prefix and panel_id_prefix must differ".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            view_label: "Tabs".to_string(),
            activation: ActivationMode::Manual,
            tab_id_prefix: "tab-".to_string(),
            panel_id_prefix: "tabpanel-".to_string(),
            focus_panel_on_activate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_use_defaults() {
        let options: ViewOptions =
            serde_json::from_str(r#"{"view_label": "Course", "activation": "automatic"}"#).unwrap();
        assert_eq!(options.view_label, "Course");
        assert_eq!(options.activation, ActivationMode::Automatic);
        assert_eq!(options.panel_id_prefix, "tabpanel-");
        assert!(options.focus_panel_on_activate);
    }

    #[test]
    fn test_validate() {
        assert!(ViewOptions::default().validate().is_ok());

        let same = ViewOptions {
            tab_id_prefix: "x-".to_string(),
            panel_id_prefix: "x-".to_string(),
            ..Default::default()
        };
        assert!(matches!(same.validate(), Err(TabError::InvalidOptions(_))));

        let spaced = ViewOptions {
            panel_id_prefix: "tab panel-".to_string(),
            ..Default::default()
        };
        assert!(matches!(spaced.validate(), Err(TabError::InvalidOptions(_))));
    }

    #[test]
    fn test_with_label() {
        let options = ViewOptions::with_label("Profile");
        assert_eq!(options.view_label, "Profile");
        assert_eq!(options.activation, ActivationMode::Manual);
    }
}
