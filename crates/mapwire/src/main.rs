// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapwire - mapper function discovery and wiring.
//!
//! This is the binary entry point. It loads the configuration, wires every
//! mapper function, and lets you inspect or call the result.

mod call;
mod check;
mod error;
mod host;
mod list;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mapwire_config::MapwireConfig;

use crate::error::CliError;

/// Mapwire - mapper function discovery and wiring.
#[derive(Parser, Debug)]
#[command(name = "mapwire", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Wire all mapper functions and hand off mapping files (default).
    Check {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// List registered mapper functions.
    List {
        /// Output JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Evaluate a mapper function with literal arguments.
    Call {
        /// Function name, e.g. `addBusinessDays`.
        name: String,
        /// Arguments: numbers, true/false, null, YYYY-MM-DD dates, or text.
        args: Vec<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => mapwire_config::load_and_validate_path(path),
        None => mapwire_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            mapwire_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match run(cli.command.unwrap_or(Commands::Check { plain: false }), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: MapwireConfig) -> Result<(), CliError> {
    match command {
        Commands::Check { plain } => check::run_check(config, plain).map(|_| ()),
        Commands::List { json, plain } => {
            let started = host::start(config)?;
            list::run_list(&started.registry, json, plain)
        }
        Commands::Call { name, args } => {
            let started = host::start(config)?;
            call::run_call(&started.registry, &name, &args)
        }
        Commands::Config => {
            let toml = mapwire_config::to_toml(&config)
                .map_err(|e| CliError::Output(e.to_string()))?;
            print!("{toml}");
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber with an environment filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mapwire={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn call_takes_trailing_arguments() {
        let cli = Cli::try_parse_from(["mapwire", "call", "addBusinessDays", "2024-01-05", "2"])
            .unwrap();
        match cli.command {
            Some(Commands::Call { name, args }) => {
                assert_eq!(name, "addBusinessDays");
                assert_eq!(args, ["2024-01-05", "2"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn missing_cut_off_date_fails_check() {
        let config = mapwire_config::load_and_validate_str("").unwrap();
        let err = run(Commands::Check { plain: true }, config).unwrap_err();
        assert!(err.to_string().contains("GetCutOffDate"));
    }
}
