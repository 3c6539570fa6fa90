//! # bem CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bem_cli::check::{run_check, CheckArgs};
use bem_cli::config::CliConfig;
use bem_cli::convert::{run_convert, ConvertArgs};
use bem_cli::mods::{run_mods, ModsArgs};

/// BEM class-name toolkit.
///
/// Validates BEM (Block-Element-Modifier) class names, converts them
/// between string, object and vector forms, and reads modifiers off DOM
/// class attributes.
#[derive(Parser, Debug)]
#[command(name = "bem", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit log lines as JSON objects on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate class names and print their canonical form.
    Check(CheckArgs),

    /// Convert a class name between string, object and vector forms.
    Convert(ConvertArgs),

    /// List the modifiers a class attribute carries for a scope.
    Mods(ModsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level(cli.verbose)))
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!("bem CLI starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Convert(args) => run_convert(&args, &config),
        Commands::Mods(args) => run_mods(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
