//! Style fragments in the `key=value;key=value;` form understood by the
//! diagram renderer.
//!
//! Fragments are treated as opaque strings almost everywhere. The exception
//! is the theme, which merges per-kind styles over the base style key by key.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A `;`-separated item had no `=`.
    #[error("style item `{0}` is not a key=value pair")]
    MissingValue(String),
    #[error("style item `{0}` has an empty key")]
    EmptyKey(String),
}

/// Ordered `key=value` pairs. Keys are unique; the first insertion fixes the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, keeping the original position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of `self` with every pair of `overrides` applied on top.
    pub fn merged_with(&self, overrides: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (key, value) in &overrides.entries {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl FromStr for StyleMap {
    type Err = StyleError;

    /// Parses `"rounded=0;whiteSpace=wrap;"`. Empty items are skipped and only
    /// the first `=` splits key from value, so `image=data:x=y` is one pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = StyleMap::new();

        for item in s.split(';') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| StyleError::MissingValue(item.to_string()))?;

            if key.trim().is_empty() {
                return Err(StyleError::EmptyKey(item.to_string()));
            }

            map.insert(key.trim(), value);
        }

        Ok(map)
    }
}

/// Renders as `k1=v1;k2=v2` without a trailing separator.
impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        let map: StyleMap = "shape=image;html=1;;image=data:image/png,abc=;".parse().unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("shape"), Some("image"));
        assert_eq!(map.get("image"), Some("data:image/png,abc="));
        assert_eq!(map.get("missing"), None);

        assert!(matches!(
            "shape=image;rounded".parse::<StyleMap>(),
            Err(StyleError::MissingValue(_))
        ));
        assert!(matches!(
            "=1".parse::<StyleMap>(),
            Err(StyleError::EmptyKey(_))
        ));
    }

    #[test]
    fn test_merge_keeps_base_order() {
        let base: StyleMap = "shape=image;fontColor=#000;labelPosition=bottom".parse().unwrap();
        let custom: StyleMap = "fontColor=#fff;image=router.svg".parse().unwrap();

        let merged = base.merged_with(&custom);

        assert_eq!(
            merged.to_string(),
            "shape=image;fontColor=#fff;labelPosition=bottom;image=router.svg"
        );
        // The base map is untouched
        assert_eq!(base.get("fontColor"), Some("#000"));
    }
}
