//! # BemBase — BEM Value/Builder Type
//!
//! A validated BEM class name plus two immutability flags.
//!
//! ## States
//!
//! ```text
//!            freeze()                       with_options(.., finalized())
//! Unfrozen ───────────▶ Frozen             Final (frozen forever)
//!    ▲                    │                   │
//!    └────── unfreeze() ──┘                   └── unfreeze() ─▶ FinalUnfreeze
//! ```
//!
//! | state          | in-place mutation | `unfreeze()`    | `freeze()` |
//! |----------------|-------------------|-----------------|------------|
//! | unfrozen       | allowed           | no-op           | → frozen   |
//! | frozen         | `FrozenMutation`  | → unfrozen      | no-op      |
//! | frozen + final | `FrozenMutation`  | `FinalUnfreeze` | no-op      |
//!
//! ## Mutation
//!
//! Every change is validated against the *whole* resulting structure
//! before it is committed, so a rejected change leaves the instance
//! untouched. Changes apply either in place (`set_*`, guarded by the
//! frozen flag) or to a fresh copy (`with_*`), which starts unfrozen and
//! non-final regardless of the receiver's flags and never touches the
//! receiver.
//!
//! ## Equality
//!
//! There is deliberately no `PartialEq`: two instances denote the same
//! class name iff their [`to_bem_string`](BemBase::to_bem_string) outputs
//! are equal.

use serde::{Deserialize, Serialize};

use crate::convert::{render, to_bem_object};
use crate::error::{BemError, Result};
use crate::json;
use crate::options::{BaseOptions, SetOptions};
use crate::shape::{BemObject, BemStructure, BemVector, Modifier};
use crate::validate::check_bem_object;

/// A validated BEM class name with freeze state.
#[derive(Debug, Clone)]
pub struct BemBase {
    object: BemObject,
    is_frozen: bool,
    is_final: bool,
}

/// A single-component change to a `BemBase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Replace the block.
    Blk(String),
    /// Replace the element; `None` clears it.
    Elt(Option<String>),
    /// Replace the modifier; `None` clears it.
    Mod(Option<Modifier>),
}

impl Change {
    /// Component name, as used in error messages.
    pub fn component(&self) -> &'static str {
        match self {
            Self::Blk(_) => "blk",
            Self::Elt(_) => "elt",
            Self::Mod(_) => "mod",
        }
    }
}

/// Outcome of [`BemBase::apply`].
#[derive(Debug)]
pub enum Applied<'a> {
    /// The receiver was changed and is handed back for chaining.
    InPlace(&'a mut BemBase),
    /// A new, independent instance carrying the change.
    Fresh(BemBase),
}

impl Applied<'_> {
    /// The instance that now carries the change.
    pub fn base(&self) -> &BemBase {
        match self {
            Self::InPlace(base) => base,
            Self::Fresh(base) => base,
        }
    }
}

impl BemBase {
    /// Create an unfrozen, non-final instance from any supported shape.
    pub fn new(init: impl Into<BemStructure>) -> Result<Self> {
        Self::with_options(init, BaseOptions::default())
    }

    /// Create an instance with explicit construction flags. `is_final`
    /// forces `is_frozen`.
    ///
    /// # Errors
    ///
    /// Any validation error from normalizing `init` to its record form.
    pub fn with_options(init: impl Into<BemStructure>, options: BaseOptions) -> Result<Self> {
        let object = to_bem_object(init)?;
        let options = options.normalized();
        Ok(Self {
            object,
            is_frozen: options.is_frozen,
            is_final: options.is_final,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn blk(&self) -> &str {
        &self.object.blk
    }

    pub fn elt(&self) -> Option<&str> {
        self.object.elt.as_deref()
    }

    pub fn modifier(&self) -> Option<&Modifier> {
        self.object.modifier.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        self.is_frozen
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    // ── Freeze state ─────────────────────────────────────────────────

    /// Reject in-place mutation from now on. Idempotent.
    pub fn freeze(&mut self) -> &mut Self {
        self.is_frozen = true;
        self
    }

    /// Allow in-place mutation again. Idempotent on non-final instances.
    ///
    /// # Errors
    ///
    /// [`BemError::FinalUnfreeze`] if the instance is final.
    pub fn unfreeze(&mut self) -> Result<&mut Self> {
        if self.is_final {
            return Err(BemError::FinalUnfreeze {
                current: self.to_bem_string(),
            });
        }
        self.is_frozen = false;
        Ok(self)
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Apply `change` in place, or to a fresh copy when `options.fresh`.
    ///
    /// Takes `&mut self` on both paths. Callers holding a shared reference
    /// (a final root behind `&` or `Arc`) use [`with_change`](Self::with_change)
    /// or the `with_*` methods instead.
    ///
    /// # Errors
    ///
    /// [`BemError::FrozenMutation`] for an in-place change on a frozen
    /// instance; otherwise the validation error of the resulting structure.
    pub fn apply(&mut self, change: Change, options: SetOptions) -> Result<Applied<'_>> {
        if options.fresh {
            return self.with_change(change).map(Applied::Fresh);
        }
        self.ensure_mutable(&change)?;
        self.commit(change)?;
        Ok(Applied::InPlace(self))
    }

    /// Replace the block in place.
    pub fn set_blk(&mut self, blk: impl Into<String>) -> Result<&mut Self> {
        self.apply_in_place(Change::Blk(blk.into()))
    }

    /// Replace the element in place.
    pub fn set_elt(&mut self, elt: impl Into<String>) -> Result<&mut Self> {
        self.apply_in_place(Change::Elt(Some(elt.into())))
    }

    /// Remove the element in place.
    pub fn clear_elt(&mut self) -> Result<&mut Self> {
        self.apply_in_place(Change::Elt(None))
    }

    /// Replace the modifier in place.
    pub fn set_mod(&mut self, modifier: impl Into<Modifier>) -> Result<&mut Self> {
        self.apply_in_place(Change::Mod(Some(modifier.into())))
    }

    /// Remove the modifier in place.
    pub fn clear_mod(&mut self) -> Result<&mut Self> {
        self.apply_in_place(Change::Mod(None))
    }

    /// A fresh copy with the block replaced.
    pub fn with_blk(&self, blk: impl Into<String>) -> Result<BemBase> {
        self.with_change(Change::Blk(blk.into()))
    }

    /// A fresh copy with the element replaced.
    pub fn with_elt(&self, elt: impl Into<String>) -> Result<BemBase> {
        self.with_change(Change::Elt(Some(elt.into())))
    }

    /// A fresh copy without an element.
    pub fn without_elt(&self) -> Result<BemBase> {
        self.with_change(Change::Elt(None))
    }

    /// A fresh copy with the modifier replaced.
    pub fn with_mod(&self, modifier: impl Into<Modifier>) -> Result<BemBase> {
        self.with_change(Change::Mod(Some(modifier.into())))
    }

    /// A fresh copy without a modifier.
    pub fn without_mod(&self) -> Result<BemBase> {
        self.with_change(Change::Mod(None))
    }

    fn apply_in_place(&mut self, change: Change) -> Result<&mut Self> {
        self.ensure_mutable(&change)?;
        self.commit(change)?;
        Ok(self)
    }

    fn ensure_mutable(&self, change: &Change) -> Result<()> {
        if self.is_frozen {
            return Err(BemError::FrozenMutation {
                component: change.component(),
                current: self.to_bem_string(),
                is_final: self.is_final,
            });
        }
        Ok(())
    }

    /// A fresh, unfrozen and non-final copy carrying `change`. The receiver
    /// is never touched, whatever its flags.
    pub fn with_change(&self, change: Change) -> Result<BemBase> {
        let mut fresh = self.fresh_copy();
        fresh.commit(change)?;
        Ok(fresh)
    }

    fn fresh_copy(&self) -> BemBase {
        BemBase {
            object: self.object.clone(),
            is_frozen: false,
            is_final: false,
        }
    }

    /// Validate the composite structure, then swap it in.
    fn commit(&mut self, change: Change) -> Result<()> {
        let mut candidate = self.object.clone();
        match change {
            Change::Blk(blk) => candidate.blk = blk,
            Change::Elt(elt) => candidate.elt = elt,
            Change::Mod(modifier) => candidate.modifier = modifier,
        }
        check_bem_object(&candidate)?;
        self.object = candidate;
        Ok(())
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_bem_object(&self) -> BemObject {
        self.object.clone()
    }

    pub fn to_bem_string(&self) -> String {
        render(&self.object)
    }

    pub fn to_bem_vector(&self) -> BemVector {
        BemVector::from(self.object.clone())
    }

    /// The CSS class selector for this name: `"." + to_bem_string()`.
    pub fn class_selector(&self) -> String {
        format!(".{}", render(&self.object))
    }
}

impl std::fmt::Display for BemBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(&self.object))
    }
}

impl std::str::FromStr for BemBase {
    type Err = BemError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Serialize for BemBase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bem_string())
    }
}

impl<'de> Deserialize<'de> for BemBase {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let structure = json::from_json(&raw).map_err(serde::de::Error::custom)?;
        Self::new(structure).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fresh mutation never changes the receiver.
        #[test]
        fn fresh_isolation(
            blk in "[a-z][a-z0-9]{0,5}",
            other in "[a-z][a-z0-9]{0,5}",
            elt in "[a-z][a-z0-9]{0,5}",
        ) {
            let a = BemBase::new(blk.as_str()).unwrap();
            let before = a.to_bem_string();
            let _b = a.with_blk(other.as_str()).unwrap();
            let _c = a.with_elt(elt.as_str()).unwrap();
            let _d = a.with_mod(elt.as_str()).unwrap();
            prop_assert_eq!(a.to_bem_string(), before);
        }

        /// Final instances reject every in-place change and every unfreeze.
        #[test]
        fn final_is_frozen_forever(blk in "[a-z][a-z0-9]{0,5}", n in 1usize..5) {
            let mut a = BemBase::with_options(blk.as_str(), BaseOptions::finalized()).unwrap();
            for _ in 0..n {
                prop_assert!(
                    matches!(a.unfreeze(), Err(BemError::FinalUnfreeze { .. })),
                    "unfreeze must fail on a final instance"
                );
                a.freeze();
                prop_assert!(
                    matches!(a.set_blk("x"), Err(BemError::FrozenMutation { .. })),
                    "set_blk must fail on a final instance"
                );
                prop_assert!(
                    matches!(a.set_elt("x"), Err(BemError::FrozenMutation { .. })),
                    "set_elt must fail on a final instance"
                );
                prop_assert!(
                    matches!(a.clear_mod(), Err(BemError::FrozenMutation { .. })),
                    "clear_mod must fail on a final instance"
                );
            }
            prop_assert!(a.is_frozen() && a.is_final());
        }

        /// freeze() twice equals freeze() once.
        #[test]
        fn freeze_idempotent(twice in any::<bool>()) {
            let mut a = BemBase::new("block").unwrap();
            a.freeze();
            if twice {
                a.freeze();
            }
            prop_assert!(a.is_frozen());
            a.unfreeze().unwrap();
            if twice {
                a.unfreeze().unwrap();
            }
            prop_assert!(!a.is_frozen());
        }
    }
}
