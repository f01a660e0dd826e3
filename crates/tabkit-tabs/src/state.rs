//! Per-tab ARIA state
//!
//! Each tab button and its panel mirror one of two states:
//! ```text
//!            tab button                               panel
//! Active     aria-expanded/selected=true, tabindex=0   aria-hidden=false
//! Inactive   aria-expanded/selected=false, tabindex=-1 aria-hidden=true, .is-hidden
//! ```

use serde::{Deserialize, Serialize};
use tabkit_dom::Element;

pub(crate) const ACTIVE_CLASS: &str = "is-active";
pub(crate) const HIDDEN_CLASS: &str = "is-hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Tab is selected and its panel visible
    Active,
    /// Tab is reachable by arrow keys only; panel hidden
    Inactive,
}

impl TabState {
    pub fn from_active(active: bool) -> Self {
        if active {
            TabState::Active
        } else {
            TabState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn aria_selected(&self) -> &'static str {
        if self.is_active() {
            "true"
        } else {
            "false"
        }
    }

    pub fn tabindex(&self) -> &'static str {
        if self.is_active() {
            "0"
        } else {
            "-1"
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_active() {
            "false"
        } else {
            "true"
        }
    }

    /// Write this state onto a tab button
    pub fn apply_to_tab(&self, button: &mut Element) {
        button.set_attr("aria-expanded", self.aria_selected());
        button.set_attr("aria-selected", self.aria_selected());
        button.set_attr("tabindex", self.tabindex());
        button.toggle_class(ACTIVE_CLASS, self.is_active());
    }

    /// Write this state onto a tab panel
    pub fn apply_to_panel(&self, panel: &mut Element) {
        panel.set_attr("aria-hidden", self.aria_hidden());
        panel.toggle_class(HIDDEN_CLASS, !self.is_active());
    }

    /// Read the state back from a rendered tab button
    pub fn of_tab(button: &Element) -> Self {
        Self::from_active(button.attr("aria-selected") == Some("true"))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "inactive" => Ok(TabState::Inactive),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_active_then_inactive() {
        let mut button = Element::new("button").with_class("tab");

        TabState::Active.apply_to_tab(&mut button);
        assert_eq!(button.attr("aria-expanded"), Some("true"));
        assert_eq!(button.attr("aria-selected"), Some("true"));
        assert_eq!(button.attr("tabindex"), Some("0"));
        assert!(button.has_class(ACTIVE_CLASS));
        assert_eq!(TabState::of_tab(&button), TabState::Active);

        TabState::Inactive.apply_to_tab(&mut button);
        assert_eq!(button.attr("aria-expanded"), Some("false"));
        assert_eq!(button.attr("aria-selected"), Some("false"));
        assert_eq!(button.attr("tabindex"), Some("-1"));
        assert!(!button.has_class(ACTIVE_CLASS));
        assert!(button.has_class("tab"));
    }

    #[test]
    fn test_apply_to_panel() {
        let mut panel = Element::new("div").with_class("tabpanel");

        TabState::Inactive.apply_to_panel(&mut panel);
        assert_eq!(panel.attr("aria-hidden"), Some("true"));
        assert!(panel.has_class(HIDDEN_CLASS));

        TabState::Active.apply_to_panel(&mut panel);
        assert_eq!(panel.attr("aria-hidden"), Some("false"));
        assert!(!panel.has_class(HIDDEN_CLASS));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("Active".parse::<TabState>(), Ok(TabState::Active));
        assert_eq!(TabState::Inactive.to_string(), "inactive");
        assert!("frozen".parse::<TabState>().is_err());
    }
}
