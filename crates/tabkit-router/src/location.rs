//! Location parsing
//!
//! Only the fragment of a location is routable. Fragments are stored
//! decoded and without leading `#` or `/`.

use url::Url;

use crate::error::RouterError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    href: String,
    fragment: String,
}

impl Location {
    /// Parse an absolute URL and extract its decoded fragment
    pub fn parse(href: &str) -> Result<Self> {
        let url = Url::parse(href).map_err(|e| RouterError::InvalidLocation(format!("{href}: {e}")))?;

        let raw = url.fragment().unwrap_or_default();
        let decoded = urlencoding::decode(raw)
            .map_err(|e| RouterError::InvalidLocation(format!("{href}: {e}")))?;

        Ok(Self {
            href: url.to_string(),
            fragment: normalize_fragment(&decoded),
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// Strip leading `#`/`/` and trailing whitespace
pub fn normalize_fragment(fragment: &str) -> String {
    fragment
        .trim_start_matches(['#', '/'])
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        let loc = Location::parse("https://example.com/courses/demo#test-2").unwrap();
        assert_eq!(loc.fragment(), "test-2");
        assert!(loc.href().starts_with("https://example.com/courses/demo"));
    }

    #[test]
    fn test_parse_decodes_fragment() {
        let loc = Location::parse("https://example.com/page#/test%202").unwrap();
        assert_eq!(loc.fragment(), "test 2");
    }

    #[test]
    fn test_parse_without_fragment() {
        let loc = Location::parse("https://example.com/").unwrap();
        assert_eq!(loc.fragment(), "");
    }

    #[test]
    fn test_parse_rejects_relative() {
        assert!(matches!(
            Location::parse("not a url"),
            Err(RouterError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_normalize_fragment() {
        assert_eq!(normalize_fragment("#/test-1 "), "test-1");
        assert_eq!(normalize_fragment("test 1"), "test 1");
        assert_eq!(normalize_fragment(""), "");
    }
}
