use compact_str::CompactString;
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// Opaque key identifying one catalog entry within a marketplace.
///
/// Used both as the deduplication key during enumeration and as the join key
/// across the facets of one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(CompactString);

impl ItemId {
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(CompactString::new(id.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(CompactString::from(id))
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_raw_id() {
        let id = ItemId::new("com.example.app");
        assert_eq!(id.to_string(), "com.example.app");
        assert_eq!(id.as_str(), "com.example.app");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ItemId::from("com.example.app");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"com.example.app\"");

        let back: ItemId = serde_json::from_str("\"com.example.app\"").unwrap();
        assert_eq!(back, id);
    }
}
