// src/models/entry.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Attribute;

/// A unit of crawl work: an absolute URL plus the number of fetch hops
/// taken to reach it from a seed.
///
/// The URL is carried as-is, never validated or canonicalized. The
/// frontier has no uniqueness constraint, so the same URL may exist as
/// any number of independent entries at the same or different depths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub url: String,
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    /// Decode an entry from a change record's post-mutation image.
    ///
    /// Requires `url` as a string attribute and `depth` as a numeric
    /// attribute parsing as a non-negative integer.
    pub fn from_image(image: &HashMap<String, Attribute>) -> Result<Self> {
        let url = image
            .get("url")
            .and_then(Attribute::as_string)
            .ok_or_else(|| AppError::decode("new image is missing string attribute `url`"))?;

        let raw_depth = image
            .get("depth")
            .and_then(Attribute::as_number)
            .ok_or_else(|| AppError::decode("new image is missing numeric attribute `depth`"))?;

        let depth = raw_depth.parse::<u32>().map_err(|e| {
            AppError::decode(format!("depth `{raw_depth}` is not a valid depth: {e}"))
        })?;

        Ok(Self::new(url, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: Option<&str>, depth: Option<&str>) -> HashMap<String, Attribute> {
        let mut image = HashMap::new();
        if let Some(url) = url {
            image.insert("url".to_string(), Attribute::string(url));
        }
        if let Some(depth) = depth {
            image.insert("depth".to_string(), Attribute::number(depth));
        }
        image
    }

    #[test]
    fn decodes_valid_image() {
        let entry = FrontierEntry::from_image(&image(Some("http://seed.example"), Some("0")));
        assert_eq!(entry.unwrap(), FrontierEntry::new("http://seed.example", 0));
    }

    #[test]
    fn rejects_missing_url() {
        assert!(FrontierEntry::from_image(&image(None, Some("1"))).is_err());
    }

    #[test]
    fn rejects_missing_depth() {
        assert!(FrontierEntry::from_image(&image(Some("http://a.example"), None)).is_err());
    }

    #[test]
    fn rejects_non_numeric_depth() {
        let result = FrontierEntry::from_image(&image(Some("http://a.example"), Some("deep")));
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn rejects_negative_depth() {
        let result = FrontierEntry::from_image(&image(Some("http://a.example"), Some("-1")));
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
