//! # Name/Value Grammar
//!
//! Pure predicates classifying strings as BEM name or BEM value tokens.
//!
//! ## Rules
//!
//! A **name** (block, element, modifier name):
//!
//! - is non-empty and starts with an ASCII letter,
//! - contains only ASCII letters, digits and `-`,
//! - ends with a letter or digit,
//! - never contains two adjacent dashes.
//!
//! A **value** (modifier value) follows the same rules except that the
//! first character may also be a digit.
//!
//! Separators (`__`, `--`, `_`) can therefore never appear inside a valid
//! token, which is what makes the serialized form unambiguous.

use serde::{Deserialize, Serialize};

use crate::error::{BemError, Location};

/// Whether `s` is a valid BEM name (block, element or modifier name).
pub fn is_bem_name(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(c) if c.is_ascii_alphabetic()) && is_token(s)
}

/// Whether `s` is a valid BEM value (modifier value).
pub fn is_bem_value(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(c) if c.is_ascii_alphanumeric()) && is_token(s)
}

/// Shared tail of both rules: body charset, alphanumeric last character,
/// no `--`.
fn is_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(last) = bytes.last() else {
        return false;
    };
    last.is_ascii_alphanumeric()
        && bytes.iter().all(|c| c.is_ascii_alphanumeric() || *c == b'-')
        && !bytes.windows(2).any(|w| w == b"--")
}

/// A string that satisfies [`is_bem_name`].
///
/// Used where a bare block name stands in for a whole BEM structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BemName(String);

impl<'de> Deserialize<'de> for BemName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl BemName {
    /// Create a name, validating it against the name grammar.
    ///
    /// # Errors
    ///
    /// Returns [`BemError::InvalidBlock`] if the string is not a valid
    /// BEM name.
    pub fn new(value: impl Into<String>) -> Result<Self, BemError> {
        let s = value.into();
        if !is_bem_name(&s) {
            return Err(BemError::InvalidBlock {
                at: Location::Text,
                found: "string",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Access the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BemName {
    type Err = BemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Names ────────────────────────────────────────────────────────

    #[test]
    fn test_single_letter_is_name() {
        assert!(is_bem_name("a"));
        assert!(is_bem_name("Z"));
    }

    #[test]
    fn test_dashed_names() {
        assert!(is_bem_name("mod-name"));
        assert!(is_bem_name("a-b-c"));
        assert!(is_bem_name("block2"));
        assert!(is_bem_name("b-2"));
    }

    #[test]
    fn test_name_rejects_leading_digit() {
        assert!(!is_bem_name("1a"));
        assert!(!is_bem_name("1"));
    }

    #[test]
    fn test_name_rejects_adjacent_dashes() {
        assert!(!is_bem_name("a--b"));
        assert!(!is_bem_name("a---b"));
    }

    #[test]
    fn test_name_rejects_edge_dashes() {
        assert!(!is_bem_name("-a"));
        assert!(!is_bem_name("a-"));
        assert!(!is_bem_name("-"));
    }

    #[test]
    fn test_name_rejects_foreign_characters() {
        assert!(!is_bem_name(""));
        assert!(!is_bem_name("a_b"));
        assert!(!is_bem_name("a__b"));
        assert!(!is_bem_name("a b"));
        assert!(!is_bem_name("a:b"));
        assert!(!is_bem_name("a.b"));
        assert!(!is_bem_name("caf\u{e9}"));
    }

    // ── Values ───────────────────────────────────────────────────────

    #[test]
    fn test_value_accepts_leading_digit() {
        assert!(is_bem_value("1"));
        assert!(is_bem_value("2a"));
        assert!(is_bem_value("10-px"));
    }

    #[test]
    fn test_value_shares_name_rules() {
        assert!(is_bem_value("mod-value"));
        assert!(!is_bem_value(""));
        assert!(!is_bem_value("-1"));
        assert!(!is_bem_value("1-"));
        assert!(!is_bem_value("1--2"));
        assert!(!is_bem_value("a_b"));
    }

    // ── BemName ──────────────────────────────────────────────────────

    #[test]
    fn test_bem_name_new() {
        let name = BemName::new("block").unwrap();
        assert_eq!(name.as_str(), "block");
        assert_eq!(name.to_string(), "block");
    }

    #[test]
    fn test_bem_name_rejects_invalid() {
        match BemName::new("1block").unwrap_err() {
            BemError::InvalidBlock { value, .. } => assert_eq!(value, "1block"),
            other => panic!("Expected InvalidBlock, got: {other:?}"),
        }
    }

    #[test]
    fn test_bem_name_deserialize_validates() {
        let ok: BemName = serde_json::from_str("\"menu\"").unwrap();
        assert_eq!(ok.as_str(), "menu");
        assert!(serde_json::from_str::<BemName>("\"menu--x\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every name is also a value.
        #[test]
        fn name_implies_value(s in "[a-zA-Z0-9_-]{0,12}") {
            if is_bem_name(&s) {
                prop_assert!(is_bem_value(&s));
            }
        }

        /// Generated well-formed names are accepted.
        #[test]
        fn generated_names_accepted(s in "[a-zA-Z]([a-zA-Z0-9]|-[a-zA-Z0-9]){0,8}") {
            prop_assert!(is_bem_name(&s));
        }

        /// No accepted token contains a separator.
        #[test]
        fn tokens_never_contain_separators(s in "[a-z0-9_-]{1,12}") {
            if is_bem_value(&s) {
                prop_assert!(!s.contains("--"));
                prop_assert!(!s.contains('_'));
            }
        }
    }
}
