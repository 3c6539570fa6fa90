//! # BEM Shapes
//!
//! The three canonical surface forms of a BEM class name, plus the
//! [`BemStructure`] sum type that accepts any of them.
//!
//! ```text
//! string   block__elt--mod_value
//! object   { "blk": "block", "elt": "elt", "mod": ["mod", "value"] }
//! vector   ["block", "elt", ["mod", "value"]]
//! ```
//!
//! The record and vector types here are *candidate* data: constructing one
//! performs no grammar check. Validation lives in [`crate::validate`] and
//! conversion in [`crate::convert`]; both reject invalid candidates without
//! altering them.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::base::BemBase;
use crate::grammar::BemName;

// ─── Modifier ────────────────────────────────────────────────────────

/// A modifier: required name, optional value.
///
/// Serializes as a 1-element (`["name"]`) or 2-element
/// (`["name", "value"]`) array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    /// Modifier name (BEM name grammar).
    pub name: String,
    /// Modifier value (BEM value grammar), if any.
    pub value: Option<String>,
}

impl Modifier {
    /// A boolean-style modifier with no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// A key/value modifier.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl From<&str> for Modifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Modifier {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Modifier {
    fn from((name, value): (N, V)) -> Self {
        Self::with_value(name, value)
    }
}

impl Serialize for Modifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.value.is_some() { 2 } else { 1 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.name)?;
        if let Some(value) = &self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Modifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ModifierVisitor;

        impl<'de> Visitor<'de> for ModifierVisitor {
            type Value = Modifier;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a [name] or [name, value] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Modifier, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let value: Option<String> = seq.next_element::<Option<String>>()?.flatten();
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Modifier { name, value })
            }
        }

        deserializer.deserialize_seq(ModifierVisitor)
    }
}

// ─── Structured form ─────────────────────────────────────────────────

/// The structured (record) form: `{ blk, elt?, mod? }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BemObject {
    /// Block name. Always present.
    pub blk: String,
    /// Element name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elt: Option<String>,
    /// Modifier, serialized under the key `mod`.
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
}

impl BemObject {
    /// A block-only object.
    pub fn new(blk: impl Into<String>) -> Self {
        Self {
            blk: blk.into(),
            elt: None,
            modifier: None,
        }
    }

    /// Builder-style: set the element.
    pub fn with_elt(mut self, elt: impl Into<String>) -> Self {
        self.elt = Some(elt.into());
        self
    }

    /// Builder-style: set the modifier.
    pub fn with_mod(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }
}

// ─── Positional form ─────────────────────────────────────────────────

/// The positional form: `[blk, elt?, mod?]`, slot-for-slot equivalent to
/// [`BemObject`]. Absent components are `None` holes and serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BemVector(pub String, pub Option<String>, pub Option<Modifier>);

impl BemVector {
    pub fn blk(&self) -> &str {
        &self.0
    }

    pub fn elt(&self) -> Option<&str> {
        self.1.as_deref()
    }

    pub fn modifier(&self) -> Option<&Modifier> {
        self.2.as_ref()
    }
}

impl From<BemObject> for BemVector {
    fn from(obj: BemObject) -> Self {
        Self(obj.blk, obj.elt, obj.modifier)
    }
}

impl From<BemVector> for BemObject {
    fn from(BemVector(blk, elt, modifier): BemVector) -> Self {
        Self { blk, elt, modifier }
    }
}

// ─── Any shape ───────────────────────────────────────────────────────

/// Any supported BEM initializer, resolved once at the API boundary.
#[derive(Debug, Clone)]
pub enum BemStructure {
    /// A bare, already-validated block name.
    Name(BemName),
    /// The record form.
    Structured(BemObject),
    /// The serialized string form.
    Serialized(String),
    /// The positional form.
    Positional(BemVector),
    /// An existing `BemBase`, accepted as-is.
    Base(BemBase),
}

impl BemStructure {
    /// Short name of the carried shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Structured(_) => "object",
            Self::Serialized(_) => "string",
            Self::Positional(_) => "vector",
            Self::Base(_) => "BemBase",
        }
    }
}

impl From<BemName> for BemStructure {
    fn from(name: BemName) -> Self {
        Self::Name(name)
    }
}

impl From<BemObject> for BemStructure {
    fn from(obj: BemObject) -> Self {
        Self::Structured(obj)
    }
}

impl From<&str> for BemStructure {
    fn from(s: &str) -> Self {
        Self::Serialized(s.to_string())
    }
}

impl From<String> for BemStructure {
    fn from(s: String) -> Self {
        Self::Serialized(s)
    }
}

impl From<BemVector> for BemStructure {
    fn from(v: BemVector) -> Self {
        Self::Positional(v)
    }
}

impl From<BemBase> for BemStructure {
    fn from(base: BemBase) -> Self {
        Self::Base(base)
    }
}

impl From<&BemBase> for BemStructure {
    fn from(base: &BemBase) -> Self {
        Self::Base(base.clone())
    }
}
