//! # Check Subcommand
//!
//! Validates BEM class names and prints their canonical form.
//!
//! ```bash
//! bem check block__elt--mod_value 1block
//! bem check --json '{"blk":"menu","mod":["open"]}'
//! ```

use anyhow::Result;
use clap::Args;

use bem_core::{BemBase, BemError, BemStructure};

use crate::config::CliConfig;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Class names to validate.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Treat each input as JSON (string, object or vector form).
    #[arg(long)]
    pub json: bool,

    /// Stop at the first invalid input.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Execute the check subcommand. Returns exit code 1 if any input failed.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let fail_fast = args.fail_fast || config.fail_fast;
    let mut failures = 0usize;

    for input in &args.inputs {
        match check_input(input, args.json) {
            Ok(canonical) => {
                tracing::debug!(%input, %canonical, "valid");
                println!("ok  {canonical}");
            }
            Err(e) => {
                tracing::debug!(%input, error = %e, "invalid");
                println!("err {input}: {e}");
                failures += 1;
                if fail_fast {
                    break;
                }
            }
        }
    }

    tracing::info!(checked = args.inputs.len(), failures, "check finished");
    Ok(u8::from(failures > 0))
}

/// Validate one input, returning its canonical serialized form.
pub fn check_input(input: &str, json: bool) -> Result<String, BemError> {
    let structure = parse_input(input, json)?;
    BemBase::new(structure).map(|b| b.to_bem_string())
}

/// Read an input either as a serialized name or as JSON.
pub(crate) fn parse_input(input: &str, json: bool) -> Result<BemStructure, BemError> {
    if !json {
        return Ok(BemStructure::from(input));
    }
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => bem_core::from_json(&value),
        // Not JSON at all: report it as an unsupported shape.
        Err(_) => Err(BemError::UnsupportedShape {
            found: "text",
            value: input.to_string(),
        }),
    }
}
