// gamekit - command-line front end for the gamekit helpers
//
// Architecture:
// - Library (gamekit): formatter, curves, shuffle, time fetch, config
// - CLI (clap): one subcommand per helper
// - Logging (tracing): stderr, plus optional rotating JSON files

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gamekit::config::{Config, ConfigError};
use gamekit::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => exit_with_config_error(&e),
    };

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging);

    tracing::debug!("Loaded configuration: {:?}", config);

    cli::run(cli.command, &config)
}

/// A broken config should fail fast with a clear error, not silently fall
/// back to defaults while the user debugs the wrong thing.
fn exit_with_config_error(error: &ConfigError) -> ! {
    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║  CONFIG ERROR - Failed to load configuration file            ║");
    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
    eprintln!("  File: {}\n", error.path().display());
    eprintln!("  Error: {}\n", error);
    if matches!(error, ConfigError::Parse { .. }) {
        eprintln!("  Tip: Check for:\n");
        eprintln!("    - Missing quotes around string values");
        eprintln!("    - Invalid boolean values (use true/false)");
        eprintln!("    - Typos in section names\n");
    }
    eprintln!("  To reset, run `gamekit config --reset` or delete the file.\n");
    std::process::exit(1);
}
