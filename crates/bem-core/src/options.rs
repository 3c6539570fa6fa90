//! # Option Records
//!
//! Configuration records accepted by [`BemBase`](crate::BemBase)
//! construction and mutation. Both deserialize from camelCase keys with
//! every field defaulting to `false`, so `{}` and `{"isFinal": true}` are
//! complete configurations.

use serde::{Deserialize, Serialize};

/// Construction flags for a `BemBase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseOptions {
    /// Permanently frozen. Implies `is_frozen`.
    pub is_final: bool,
    /// Rejects in-place mutation until unfrozen.
    pub is_frozen: bool,
}

impl BaseOptions {
    /// Options for a frozen (but unfreezable) instance.
    pub fn frozen() -> Self {
        Self {
            is_final: false,
            is_frozen: true,
        }
    }

    /// Options for a permanently frozen instance.
    pub fn finalized() -> Self {
        Self {
            is_final: true,
            is_frozen: true,
        }
    }

    /// Apply `is_final ⇒ is_frozen`.
    pub fn normalized(self) -> Self {
        Self {
            is_final: self.is_final,
            is_frozen: self.is_frozen || self.is_final,
        }
    }
}

/// Mutation flags for the `BemBase` setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetOptions {
    /// Mutate a fresh copy instead of the receiver.
    pub fresh: bool,
}

impl SetOptions {
    pub fn fresh() -> Self {
        Self { fresh: true }
    }

    pub fn in_place() -> Self {
        Self { fresh: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_false() {
        assert_eq!(
            BaseOptions::default(),
            BaseOptions {
                is_final: false,
                is_frozen: false
            }
        );
        assert!(!SetOptions::default().fresh);
    }

    #[test]
    fn test_final_forces_frozen() {
        let opts = BaseOptions {
            is_final: true,
            is_frozen: false,
        }
        .normalized();
        assert!(opts.is_frozen);
        assert_eq!(opts, BaseOptions::finalized());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let opts: BaseOptions = serde_json::from_str(r#"{"isFinal": true}"#).unwrap();
        assert!(opts.is_final);
        assert!(!opts.is_frozen);

        let opts: BaseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, BaseOptions::default());

        let opts: SetOptions = serde_json::from_str(r#"{"fresh": true}"#).unwrap();
        assert_eq!(opts, SetOptions::fresh());
    }
}
