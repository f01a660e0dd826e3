//! Tab descriptors and selectors

use std::fmt;

use tabkit_dom::{Element, View};

/// One tab as supplied by the host
pub struct TabDescriptor {
    /// Label shown in the tab strip
    pub title: String,
    /// Location fragment that selects this tab
    pub url: Option<String>,
    /// Content rendered into the tab's panel
    pub view: Box<dyn View>,
}

impl TabDescriptor {
    pub fn new(title: impl Into<String>, view: impl View + 'static) -> Self {
        Self {
            title: title.into(),
            url: None,
            view: Box::new(view),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("title", &self.title)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Identifies a tab either by position or by url
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabSelector {
    ByIndex(usize),
    ByUrl(String),
}

impl From<usize> for TabSelector {
    fn from(index: usize) -> Self {
        TabSelector::ByIndex(index)
    }
}

impl From<&str> for TabSelector {
    fn from(url: &str) -> Self {
        TabSelector::ByUrl(url.to_string())
    }
}

impl From<String> for TabSelector {
    fn from(url: String) -> Self {
        TabSelector::ByUrl(url)
    }
}

impl fmt::Display for TabSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabSelector::ByIndex(index) => write!(f, "index {}", index),
            TabSelector::ByUrl(url) => write!(f, "url '{}'", url),
        }
    }
}

/// A resolved tab and its rendered button
#[derive(Debug, Clone, Copy)]
pub struct TabMeta<'a> {
    pub index: usize,
    pub title: &'a str,
    pub url: Option<&'a str>,
    pub panel_id: &'a str,
    /// `None` until the view has been rendered
    pub button: Option<&'a Element>,
}
