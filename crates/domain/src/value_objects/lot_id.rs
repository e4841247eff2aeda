//! Lot identifier value object.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value_object::{StringValueObject, ValidValue};

static LOT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^lot-[0-9]{3}$").expect("valid lot id regex"));

/// Identifier of a production lot, e.g. `lot-007`.
///
/// Always stored lower-cased and trimmed, so `LoT-007` and ` lot-007 ` are
/// the same lot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LotId(String);

impl LotId {
    /// Returns the lot ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StringValueObject for LotId {
    const KIND: &'static str = "LotId";

    fn pattern() -> &'static Regex {
        &LOT_ID_PATTERN
    }

    fn from_valid(value: ValidValue) -> Self {
        Self(value.into_inner())
    }
}

impl std::fmt::Display for LotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LotId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LotId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for LotId {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<LotId> for String {
    fn from(id: LotId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;
    use crate::error::ErrorCode;

    fn hash_of(id: &LotId) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_valid_lot_ids() {
        for raw in ["lot-000", "lot-001", "lot-123", "lot-999"] {
            let id = LotId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(LotId::parse("LoT-007").unwrap().as_str(), "lot-007");
        assert_eq!(LotId::parse("  LOT-042\n").unwrap().as_str(), "lot-042");
    }

    #[test]
    fn test_invalid_pattern() {
        for raw in [
            "lot-12", "lot-1234", "lot_123", "bar-123", "lot-12a", "lot123", "lot -123",
        ] {
            let error = LotId::parse(raw).unwrap_err();
            assert_eq!(error.errors().len(), 1, "{raw}");
            assert_eq!(error.errors()[0].code(), ErrorCode::InvalidPattern, "{raw}");
        }
    }

    #[test]
    fn test_empty_input() {
        for raw in ["", "   ", "\t\n"] {
            let error = LotId::parse(raw).unwrap_err();
            assert_eq!(error.errors()[0].code(), ErrorCode::CannotBeEmpty);
            assert_eq!(error.errors()[0].property_name(), "LotId");
        }

        let errors = LotId::try_create(None::<&str>).unwrap_err();
        assert_eq!(errors[0].code(), ErrorCode::CannotBeEmpty);
    }

    #[test]
    fn test_equality_after_normalization() {
        let a = LotId::parse("LOT-333").unwrap();
        let b = LotId::parse("lot-333").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, LotId::parse("lot-334").unwrap());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let id: LotId = "Lot-100".parse().unwrap();
        assert_eq!(id.to_string(), "lot-100");

        assert!(LotId::try_from("nope").is_err());
        assert_eq!(LotId::try_from(String::from("lot-101")).unwrap().value(), "lot-101");
    }

    #[test]
    fn test_serializes_as_normalized_string() {
        let id = LotId::parse(" LOT-555 ").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"lot-555\"");

        let parsed: LotId = serde_json::from_str("\"LOT-555\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialization_rejects_invalid_input() {
        assert!(serde_json::from_str::<LotId>("\"lot-5\"").is_err());
        assert!(serde_json::from_str::<LotId>("\"\"").is_err());
    }
}
