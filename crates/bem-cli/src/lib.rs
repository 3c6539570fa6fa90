//! # bem-cli — Command-Line Interface for BEM Class Names
//!
//! Provides the `bem` command-line interface over `bem-core`.
//!
//! ## Subcommands
//!
//! - `bem check` — validate class names and print their canonical form.
//! - `bem convert` — convert between string, object and vector forms.
//! - `bem mods` — list the modifiers a class attribute carries for a scope.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `bem-core`; no notation logic here.
//! - Logging goes through `tracing`; results go to stdout.

pub mod check;
pub mod config;
pub mod convert;
pub mod mods;
