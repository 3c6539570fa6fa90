//! # Canonical Converters
//!
//! Lossless conversion among the three BEM shapes. Every converter
//! validates its input first and propagates the validator's error
//! unchanged; invalid data is never coerced.
//!
//! ## Round-trip laws
//!
//! For every canonical serialized name `s` and valid record `o`:
//!
//! ```text
//! to_bem_string(to_bem_object(s)) == s
//! to_bem_object(to_bem_vector(o)) == o
//! ```
//!
//! A serialized name is canonical when it equals its own rendering.
//! Empty `_` fragments in the modifier segment are dropped on parse, so
//! `block--mod_` and `block--mod__1` are valid but render as `block--mod`
//! and `block--mod_1`.

use crate::error::Result;
use crate::shape::{BemObject, BemStructure, BemVector};
use crate::validate::{
    check_bem_structure, parse_bem_string, ELEMENT_SEPARATOR, MODIFIER_SEPARATOR,
    VALUE_SEPARATOR,
};

/// Convert any shape to the record form.
pub fn to_bem_object(input: impl Into<BemStructure>) -> Result<BemObject> {
    into_object(input.into())
}

/// Convert any shape to the serialized form
/// `blk[__elt][--modName[_modValue]]`.
pub fn to_bem_string(input: impl Into<BemStructure>) -> Result<String> {
    let obj = into_object(input.into())?;
    Ok(render(&obj))
}

/// Convert any shape to the positional form, preserving holes.
pub fn to_bem_vector(input: impl Into<BemStructure>) -> Result<BemVector> {
    into_object(input.into()).map(BemVector::from)
}

fn into_object(input: BemStructure) -> Result<BemObject> {
    check_bem_structure(&input)?;
    Ok(match input {
        BemStructure::Name(name) => BemObject::new(name.into_inner()),
        BemStructure::Structured(obj) => obj,
        BemStructure::Serialized(s) => parse_bem_string(&s)?,
        BemStructure::Positional(v) => v.into(),
        BemStructure::Base(base) => base.to_bem_object(),
    })
}

/// Serialize a record that is already known to be valid.
pub(crate) fn render(obj: &BemObject) -> String {
    let mut out = obj.blk.clone();
    if let Some(elt) = &obj.elt {
        out.push_str(ELEMENT_SEPARATOR);
        out.push_str(elt);
    }
    if let Some(modifier) = &obj.modifier {
        out.push_str(MODIFIER_SEPARATOR);
        out.push_str(&modifier.name);
        if let Some(value) = modifier.value.as_deref().filter(|v| !v.is_empty()) {
            out.push_str(VALUE_SEPARATOR);
            out.push_str(value);
        }
    }
    out
}
