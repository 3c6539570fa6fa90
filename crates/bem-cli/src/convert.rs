//! # Convert Subcommand
//!
//! Converts a BEM class name between its string, object and vector forms.
//!
//! ```bash
//! bem convert block__elt--mod_1 --to object
//! bem convert --json '["block",null,["mod"]]' --to string
//! bem convert menu--open --to vector --format yaml
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use bem_core::{to_bem_object, to_bem_string, to_bem_vector};

use crate::check::parse_input;
use crate::config::{CliConfig, OutputFormat};

/// Target form of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    String,
    Object,
    Vector,
}

/// Arguments for the convert subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Class name to convert.
    pub input: String,

    /// Form to convert to.
    #[arg(long, value_enum)]
    pub to: Target,

    /// Treat the input as JSON (string, object or vector form).
    #[arg(long)]
    pub json: bool,

    /// Output format for object and vector results.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the convert subcommand.
pub fn run_convert(args: &ConvertArgs, config: &CliConfig) -> Result<u8> {
    let format = args.format.unwrap_or(config.format);
    let output = convert(&args.input, args.json, args.to, format)?;
    println!("{output}");
    Ok(0)
}

/// Convert one input and render the result.
pub fn convert(input: &str, json: bool, to: Target, format: OutputFormat) -> Result<String> {
    let structure =
        parse_input(input, json).with_context(|| format!("invalid BEM input {input:?}"))?;
    tracing::debug!(kind = structure.kind(), target = ?to, "converting");

    let converted = match to {
        Target::String => return Ok(to_bem_string(structure)?),
        Target::Object => encode(&to_bem_object(structure)?, format)?,
        Target::Vector => encode(&to_bem_vector(structure)?, format)?,
    };
    Ok(converted)
}

fn encode<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    };
    Ok(out)
}
