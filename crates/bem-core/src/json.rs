//! # Dynamic Shape Dispatch
//!
//! Resolves an untyped [`serde_json::Value`] into a typed [`BemStructure`]
//! exactly once, at the API boundary:
//!
//! - string → [`BemStructure::Serialized`]
//! - array  → [`BemStructure::Positional`]
//! - object → [`BemStructure::Structured`]
//! - anything else → [`BemError::UnsupportedShape`]
//!
//! Record and vector inputs are checked component by component in the
//! same order as [`crate::validate`] (block, element, modifier name,
//! modifier value), with type mismatches reported against the component
//! they occur in. `null` in an optional slot means "absent".

use serde_json::{Map, Value};

use crate::error::{BemError, Location, Result};
use crate::grammar::{is_bem_name, is_bem_value};
use crate::shape::{BemObject, BemStructure, BemVector, Modifier};
use crate::validate::check_bem_structure;

const OBJECT_KEYS: [&str; 3] = ["blk", "elt", "mod"];

/// Runtime type name of a JSON value, as carried in errors.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve a JSON value into a typed BEM structure.
///
/// String inputs are only checked for emptiness here; their grammar is
/// checked when they are converted.
pub fn from_json(value: &Value) -> Result<BemStructure> {
    match value {
        Value::String(s) if s.is_empty() => Err(BemError::EmptyInput { found: "string" }),
        Value::String(s) => Ok(BemStructure::Serialized(s.clone())),
        Value::Array(items) => vector_from_json(items).map(BemStructure::Positional),
        Value::Object(map) => object_from_json(map).map(BemStructure::Structured),
        other => Err(BemError::UnsupportedShape {
            found: json_type(other),
            value: other.to_string(),
        }),
    }
}

/// Fully validate a JSON value as any BEM shape, returning it unchanged.
pub fn check_json(value: &Value) -> Result<&Value> {
    let structure = from_json(value)?;
    check_bem_structure(&structure)?;
    Ok(value)
}

fn object_from_json(map: &Map<String, Value>) -> Result<BemObject> {
    if map.is_empty() {
        return Err(BemError::EmptyInput { found: "object" });
    }
    if let Some(key) = map.keys().find(|k| !OBJECT_KEYS.contains(&k.as_str())) {
        return Err(BemError::InvalidShape {
            expected: "object",
            reason: format!("unknown key `{key}`, allowed keys are blk, elt, mod"),
            value: Value::Object(map.clone()).to_string(),
        });
    }

    let blk = match map.get("blk") {
        Some(v) => token(v, Component::Block, Location::Key("blk"))?,
        None => {
            return Err(BemError::InvalidBlock {
                at: Location::Key("blk"),
                found: "missing",
                value: String::new(),
            })
        }
    };
    let elt = optional(map.get("elt"))
        .map(|v| token(v, Component::Element, Location::Key("elt")))
        .transpose()?;
    let modifier = optional(map.get("mod"))
        .map(|v| modifier_from_json(v, Location::Key("mod")))
        .transpose()?;

    Ok(BemObject { blk, elt, modifier })
}

fn vector_from_json(items: &[Value]) -> Result<BemVector> {
    let Some(first) = items.first() else {
        return Err(BemError::EmptyInput { found: "array" });
    };
    if items.len() > 3 {
        return Err(BemError::InvalidShape {
            expected: "vector",
            reason: format!("{} slots, at most 3 allowed", items.len()),
            value: Value::Array(items.to_vec()).to_string(),
        });
    }

    let blk = token(first, Component::Block, Location::Index(0))?;
    let elt = optional(items.get(1))
        .map(|v| token(v, Component::Element, Location::Index(1)))
        .transpose()?;
    let modifier = optional(items.get(2))
        .map(|v| modifier_from_json(v, Location::Index(2)))
        .transpose()?;

    Ok(BemVector(blk, elt, modifier))
}

fn optional(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn modifier_from_json(value: &Value, at: Location) -> Result<Modifier> {
    let parts = match value {
        Value::Array(parts) if (1..=2).contains(&parts.len()) => parts,
        other => {
            return Err(BemError::InvalidModifier {
                at,
                found: json_type(other),
                value: other.to_string(),
            })
        }
    };
    let name = token(&parts[0], Component::ModifierName, at)?;
    let value = optional(parts.get(1))
        .map(|v| token(v, Component::ModifierValue, at))
        .transpose()?;
    Ok(Modifier { name, value })
}

#[derive(Clone, Copy)]
enum Component {
    Block,
    Element,
    ModifierName,
    ModifierValue,
}

impl Component {
    fn accepts(self, s: &str) -> bool {
        match self {
            Self::ModifierValue => is_bem_value(s),
            _ => is_bem_name(s),
        }
    }

    fn error(self, at: Location, found: &'static str, value: String) -> BemError {
        match self {
            Self::Block => BemError::InvalidBlock { at, found, value },
            Self::Element => BemError::InvalidElement { at, found, value },
            Self::ModifierName => BemError::InvalidModifierName { at, found, value },
            Self::ModifierValue => BemError::InvalidModifierValue { at, found, value },
        }
    }
}

/// Extract a grammar-valid token for `component`.
fn token(value: &Value, component: Component, at: Location) -> Result<String> {
    match value {
        Value::String(s) if component.accepts(s) => Ok(s.clone()),
        Value::String(s) => Err(component.error(at, "string", s.clone())),
        other => Err(component.error(at, json_type(other), other.to_string())),
    }
}
