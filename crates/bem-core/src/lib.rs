//! # bem-core — BEM Class-Name Notation Engine
//!
//! Grammar, validation and lossless conversion for BEM
//! (Block-Element-Modifier) CSS class names, plus the [`BemBase`]
//! value/builder type used to compose class-name selector tokens.
//!
//! ## Layers (leaf first)
//!
//! 1. **Grammar** (`grammar.rs`): `is_bem_name` / `is_bem_value` predicates
//!    and the validated [`BemName`] newtype.
//!
//! 2. **Shapes** (`shape.rs`): the record ([`BemObject`]), positional
//!    ([`BemVector`]) and serialized (`String`) forms, and the
//!    [`BemStructure`] sum type over all initializers.
//!
//! 3. **Validators** (`validate.rs`, `json.rs`): structural and grammatical
//!    checks per shape; `json.rs` resolves untyped JSON into a
//!    `BemStructure` once, at the boundary.
//!
//! 4. **Converters** (`convert.rs`): `to_bem_object`, `to_bem_string`,
//!    `to_bem_vector`.
//!
//! 5. **BemBase** (`base.rs`): validated value with `is_frozen` / `is_final`
//!    flags, in-place and copy-on-write mutation.
//!
//! `classes.rs` reads modifiers off DOM `class` attributes on top of these.
//!
//! ## Serialized form
//!
//! ```text
//! block__element--modifier_value
//!      ^^       ^^        ^
//! ```
//!
//! The separators `__`, `--` and `_` are fixed: downstream selectors are
//! built as `"." + to_bem_string()` and must match stylesheet class names.
//!
//! ## Crate Policy
//!
//! - Pure, synchronous, in-memory. No I/O, no logging, no global state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every fallible operation returns [`Result`] with a [`BemError`].

pub mod base;
pub mod classes;
pub mod convert;
pub mod error;
pub mod grammar;
pub mod json;
pub mod options;
pub mod shape;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use base::{Applied, BemBase, Change};
pub use classes::ClassList;
pub use convert::{to_bem_object, to_bem_string, to_bem_vector};
pub use error::{BemError, Location, Result};
pub use grammar::{is_bem_name, is_bem_value, BemName};
pub use json::{check_json, from_json};
pub use options::{BaseOptions, SetOptions};
pub use shape::{BemObject, BemStructure, BemVector, Modifier};
pub use validate::{check_bem_object, check_bem_string, check_bem_structure, check_bem_vector};
