//! url -> tab index lookup
//!
//! Keys are normalized the way the router normalizes fragments, so
//! `#test-2`, `/test-2` and `test-2` name the same tab.

use std::collections::HashMap;

use tabkit_router::normalize_fragment;

use crate::descriptor::TabDescriptor;
use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    indices: HashMap<String, usize>,
}

impl UrlMap {
    /// Build from descriptors, rejecting empty and duplicate urls
    pub fn build(tabs: &[TabDescriptor]) -> Result<Self> {
        let mut indices = HashMap::with_capacity(tabs.len());

        for (index, tab) in tabs.iter().enumerate() {
            let Some(url) = tab.url.as_deref() else {
                continue;
            };
            let key = normalize_fragment(url);
            if key.trim().is_empty() {
                return Err(TabError::InvalidUrl(format!(
                    "tab {} ('{}') has an empty URL",
                    index, tab.title
                )));
            }
            if indices.contains_key(&key) {
                return Err(TabError::DuplicateUrl(url.to_string()));
            }
            indices.insert(key, index);
        }

        Ok(Self { indices })
    }

    pub fn get(&self, url: &str) -> Option<usize> {
        self.indices.get(&normalize_fragment(url)).copied()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.indices.contains_key(&normalize_fragment(url))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_dom::TextView;

    fn tab(title: &str, url: Option<&str>) -> TabDescriptor {
        let tab = TabDescriptor::new(title, TextView::new(title));
        match url {
            Some(url) => tab.with_url(url),
            None => tab,
        }
    }

    #[test]
    fn test_build_skips_tabs_without_url() {
        let map = UrlMap::build(&[tab("A", Some("a")), tab("B", None), tab("C", Some("c"))]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("c"), Some(2));
        assert!(!map.contains("B"));
    }

    #[test]
    fn test_duplicate_url_rejected() {
        let result = UrlMap::build(&[tab("A", Some("same")), tab("B", Some("same"))]);
        assert!(matches!(result, Err(TabError::DuplicateUrl(url)) if url == "same"));
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = UrlMap::build(&[tab("A", Some("  "))]);
        assert!(matches!(result, Err(TabError::InvalidUrl(_))));

        let result = UrlMap::build(&[tab("A", Some("#/"))]);
        assert!(matches!(result, Err(TabError::InvalidUrl(_))));
    }

    #[test]
    fn test_lookup_ignores_fragment_prefix() {
        let map = UrlMap::build(&[tab("A", Some("test-1")), tab("B", Some("#test-2"))]).unwrap();
        assert_eq!(map.get("test-2"), Some(1));
        assert_eq!(map.get("#/test-1"), Some(0));
        assert!(map.contains("/test-2"));
    }

    #[test]
    fn test_duplicate_after_normalizing_rejected() {
        let result = UrlMap::build(&[tab("A", Some("test-2")), tab("B", Some("#test-2"))]);
        assert!(matches!(result, Err(TabError::DuplicateUrl(url)) if url == "#test-2"));
    }
}
