//! # Error Types — BEM Validation and Mutation Failures
//!
//! Defines [`BemError`], the single error type returned by every fallible
//! operation in this crate. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every grammar failure names the component that failed, where it was
//!   found (record key, vector position, or serialized text), the runtime
//!   type of the offending value, and the value itself.
//! - Separator-count failures carry the full input string and the number
//!   of parts it split into.
//! - Mutation failures carry the canonical string of the instance that
//!   rejected the change.
//!
//! Validation and conversion are all-or-nothing: no operation returns a
//! partially-built value alongside an error.

use thiserror::Error;

/// Where in the input shape a failing component was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// A key of the structured (record) form, e.g. `blk`.
    Key(&'static str),
    /// A slot of the positional (vector) form.
    Index(usize),
    /// A segment of the serialized string form.
    Text,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key `{key}`"),
            Self::Index(i) => write!(f, "position {i}"),
            Self::Text => f.write_str("string"),
        }
    }
}

/// Top-level error type for BEM notation handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BemError {
    /// Input is not a record, string, array, or `BemBase`.
    #[error("unsupported BEM shape: expected object, string, array or BemBase, got {found} {value}")]
    UnsupportedShape {
        /// Runtime type of the input.
        found: &'static str,
        /// The input rendered as text.
        value: String,
    },

    /// Input has the right kind but the wrong layout (unknown keys,
    /// too many vector slots).
    #[error("invalid BEM {expected} shape: {reason} (got {value})")]
    InvalidShape {
        /// The shape that was being checked (`object` or `vector`).
        expected: &'static str,
        /// What was wrong with it.
        reason: String,
        /// The input rendered as text.
        value: String,
    },

    /// Empty string, record or vector where content is required.
    #[error("empty BEM {found}: a block is required")]
    EmptyInput {
        /// Runtime type of the empty input.
        found: &'static str,
    },

    /// The block failed the name grammar.
    #[error("invalid BEM block at {at}: {found} {value:?} is not a valid BEM name")]
    InvalidBlock {
        at: Location,
        found: &'static str,
        value: String,
    },

    /// The element failed the name grammar.
    #[error("invalid BEM element at {at}: {found} {value:?} is not a valid BEM name")]
    InvalidElement {
        at: Location,
        found: &'static str,
        value: String,
    },

    /// The modifier is present but is not a 1- or 2-element tuple.
    #[error("invalid BEM modifier at {at}: expected [name] or [name, value], got {found} {value}")]
    InvalidModifier {
        at: Location,
        found: &'static str,
        value: String,
    },

    /// The modifier name failed the name grammar.
    #[error("invalid BEM modifier name at {at}: {found} {value:?} is not a valid BEM name")]
    InvalidModifierName {
        at: Location,
        found: &'static str,
        value: String,
    },

    /// The modifier value failed the value grammar.
    #[error("invalid BEM modifier value at {at}: {found} {value:?} is not a valid BEM value")]
    InvalidModifierValue {
        at: Location,
        found: &'static str,
        value: String,
    },

    /// More than one `--` separator in a serialized name.
    #[error("too many modifiers in {value:?}: split into {parts} parts on `--`, at most 2 allowed")]
    TooManyModifiers { value: String, parts: usize },

    /// More than one `__` separator in a serialized name.
    #[error("too many elements in {value:?}: split into {parts} parts on `__`, at most 2 allowed")]
    TooManyElements { value: String, parts: usize },

    /// More than one `_` separator inside the modifier segment.
    #[error("too many modifier values in {value:?}: split into {parts} parts on `_`, at most 2 allowed")]
    TooManyModifierValues { value: String, parts: usize },

    /// In-place mutation attempted on a frozen (or final) instance.
    #[error("cannot set {component} on frozen BemBase {current:?}{}", final_suffix(.is_final))]
    FrozenMutation {
        /// The component the caller tried to change.
        component: &'static str,
        /// Canonical string of the rejecting instance.
        current: String,
        /// Whether the instance is permanently frozen.
        is_final: bool,
    },

    /// `unfreeze()` called on a final instance.
    #[error("cannot unfreeze final BemBase {current:?}")]
    FinalUnfreeze {
        /// Canonical string of the rejecting instance.
        current: String,
    },
}

fn final_suffix(is_final: &bool) -> &'static str {
    if *is_final {
        " (final)"
    } else {
        ""
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Key("blk").to_string(), "key `blk`");
        assert_eq!(Location::Index(2).to_string(), "position 2");
        assert_eq!(Location::Text.to_string(), "string");
    }

    #[test]
    fn test_invalid_block_message_carries_context() {
        let err = BemError::InvalidBlock {
            at: Location::Index(0),
            found: "string",
            value: "1block".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 0"));
        assert!(msg.contains("\"1block\""));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_frozen_mutation_message_marks_final() {
        let err = BemError::FrozenMutation {
            component: "elt",
            current: "block".to_string(),
            is_final: true,
        };
        assert!(err.to_string().ends_with("(final)"));

        let err = BemError::FrozenMutation {
            component: "elt",
            current: "block".to_string(),
            is_final: false,
        };
        assert!(!err.to_string().contains("final"));
    }
}
