//! # Shape Validators
//!
//! Structural and grammatical validation of each BEM shape. Validators are
//! non-transforming: on success they hand back the input they were given.
//!
//! ## Check order
//!
//! Record and vector forms are checked block → element → modifier name →
//! modifier value, so the first failing component is reported.
//!
//! The serialized form is decomposed right to left:
//!
//! 1. split on `--`; more than two parts is [`BemError::TooManyModifiers`];
//! 2. split the modifier segment on `_`, dropping empty fragments; more than
//!    two parts is [`BemError::TooManyModifierValues`]; then check the
//!    modifier name and value;
//! 3. split the remainder on `__`; more than two parts is
//!    [`BemError::TooManyElements`]; then check the element;
//! 4. check what is left as the block.
//!
//! Dynamic (JSON) inputs are shape-checked in [`crate::json`] before they
//! reach these typed validators.

use crate::error::{BemError, Location, Result};
use crate::grammar::{is_bem_name, is_bem_value};
use crate::shape::{BemObject, BemStructure, BemVector, Modifier};

/// Element separator.
pub const ELEMENT_SEPARATOR: &str = "__";
/// Modifier separator.
pub const MODIFIER_SEPARATOR: &str = "--";
/// Modifier value separator.
pub const VALUE_SEPARATOR: &str = "_";

/// Validate the record form.
///
/// # Errors
///
/// The first failing component, addressed by key: [`BemError::InvalidBlock`],
/// [`BemError::InvalidElement`], [`BemError::InvalidModifierName`] or
/// [`BemError::InvalidModifierValue`].
pub fn check_bem_object(obj: &BemObject) -> Result<&BemObject> {
    check_components(
        &obj.blk,
        obj.elt.as_deref(),
        obj.modifier.as_ref(),
        [Location::Key("blk"), Location::Key("elt"), Location::Key("mod")],
    )?;
    Ok(obj)
}

/// Validate the positional form. Same rules as [`check_bem_object`], with
/// errors addressed by vector position.
pub fn check_bem_vector(v: &BemVector) -> Result<&BemVector> {
    check_components(
        &v.0,
        v.1.as_deref(),
        v.2.as_ref(),
        [Location::Index(0), Location::Index(1), Location::Index(2)],
    )?;
    Ok(v)
}

/// Validate the serialized form.
///
/// # Errors
///
/// [`BemError::EmptyInput`] for `""`, a separator-count error, or the first
/// failing component in right-to-left order.
pub fn check_bem_string(s: &str) -> Result<&str> {
    parse_bem_string(s)?;
    Ok(s)
}

/// Validate any supported shape. A `BemBase` is accepted as-is: its
/// invariants already hold.
pub fn check_bem_structure(input: &BemStructure) -> Result<&BemStructure> {
    match input {
        BemStructure::Name(_) | BemStructure::Base(_) => {}
        BemStructure::Structured(obj) => {
            check_bem_object(obj)?;
        }
        BemStructure::Serialized(s) => {
            check_bem_string(s)?;
        }
        BemStructure::Positional(v) => {
            check_bem_vector(v)?;
        }
    }
    Ok(input)
}

/// Decompose and validate a serialized name into its record form.
pub(crate) fn parse_bem_string(s: &str) -> Result<BemObject> {
    if s.is_empty() {
        return Err(BemError::EmptyInput { found: "string" });
    }

    let parts: Vec<&str> = s.split(MODIFIER_SEPARATOR).collect();
    if parts.len() > 2 {
        return Err(BemError::TooManyModifiers {
            value: s.to_string(),
            parts: parts.len(),
        });
    }
    let head = parts[0];

    let modifier = match parts.get(1) {
        Some(segment) => Some(parse_modifier_segment(s, segment)?),
        None => None,
    };

    let pieces: Vec<&str> = head.split(ELEMENT_SEPARATOR).collect();
    if pieces.len() > 2 {
        return Err(BemError::TooManyElements {
            value: s.to_string(),
            parts: pieces.len(),
        });
    }
    let elt = match pieces.get(1) {
        Some(elt) => Some(check_element(elt, Location::Text)?.to_string()),
        None => None,
    };

    let blk = check_block(pieces[0], Location::Text)?;

    Ok(BemObject {
        blk: blk.to_string(),
        elt,
        modifier,
    })
}

fn parse_modifier_segment(input: &str, segment: &str) -> Result<Modifier> {
    let fragments: Vec<&str> = segment
        .split(VALUE_SEPARATOR)
        .filter(|f| !f.is_empty())
        .collect();
    if fragments.len() > 2 {
        return Err(BemError::TooManyModifierValues {
            value: input.to_string(),
            parts: fragments.len(),
        });
    }
    let name = fragments.first().copied().unwrap_or_default();
    let modifier = Modifier {
        name: name.to_string(),
        value: fragments.get(1).map(|v| v.to_string()),
    };
    check_modifier(&modifier, Location::Text)?;
    Ok(modifier)
}

fn check_components(
    blk: &str,
    elt: Option<&str>,
    modifier: Option<&Modifier>,
    [blk_at, elt_at, mod_at]: [Location; 3],
) -> Result<()> {
    check_block(blk, blk_at)?;
    if let Some(elt) = elt {
        check_element(elt, elt_at)?;
    }
    if let Some(modifier) = modifier {
        check_modifier(modifier, mod_at)?;
    }
    Ok(())
}

fn check_block(blk: &str, at: Location) -> Result<&str> {
    if !is_bem_name(blk) {
        return Err(BemError::InvalidBlock {
            at,
            found: "string",
            value: blk.to_string(),
        });
    }
    Ok(blk)
}

fn check_element(elt: &str, at: Location) -> Result<&str> {
    if !is_bem_name(elt) {
        return Err(BemError::InvalidElement {
            at,
            found: "string",
            value: elt.to_string(),
        });
    }
    Ok(elt)
}

fn check_modifier(modifier: &Modifier, at: Location) -> Result<()> {
    if !is_bem_name(&modifier.name) {
        return Err(BemError::InvalidModifierName {
            at,
            found: "string",
            value: modifier.name.clone(),
        });
    }
    if let Some(value) = &modifier.value {
        if !is_bem_value(value) {
            return Err(BemError::InvalidModifierValue {
                at,
                found: "string",
                value: value.clone(),
            });
        }
    }
    Ok(())
}
