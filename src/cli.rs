// CLI module - command-line argument parsing and handlers
//
// Thin wrappers that expose the library helpers from a shell:
// - format: abbreviate big numbers
// - curve / lerp: evaluate the shaping helpers
// - shuffle: shuffle a list of words
// - time: fetch network time
// - config: show / locate / reset the config file

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use gamekit::config::{Config, VERSION};
use gamekit::curves::Curve;
use gamekit::format::{DisplayMode, NumberFormatter};
use gamekit::shuffle::{shuffle, shuffle_with};
use gamekit::time_sync::TimeClient;
use gamekit::util::lerp;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// gamekit - small helpers for game number crunching
#[derive(Parser)]
#[command(name = "gamekit")]
#[command(version = VERSION)]
#[command(about = "Number formatting, curves, shuffling and time helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Abbreviate big numbers (1.2K, 3.4M, ...)
    Format {
        /// Values to format
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Use scientific notation (1.2e6)
        #[arg(long, conflicts_with = "suffix")]
        scientific: bool,

        /// Use letter suffixes (1.2M)
        #[arg(long)]
        suffix: bool,
    },

    /// Evaluate a normalized curve
    Curve {
        /// sigmoid, inverse-sigmoid, exponential, inverse-exponential, parabolic, quadratic
        curve: Curve,

        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Value that maps to 1.0 before shaping
        #[arg(long, default_value_t = 1.0)]
        max: f64,
    },

    /// Interpolate between two values (percentage clamped to 0..1)
    Lerp {
        #[arg(allow_negative_numbers = true)]
        from: f64,
        #[arg(allow_negative_numbers = true)]
        to: f64,
        #[arg(allow_negative_numbers = true)]
        perc: f64,
    },

    /// Shuffle the given items
    Shuffle {
        items: Vec<String>,

        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fetch the current time from the configured time service
    Time,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Dispatch a parsed command
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Format {
            values,
            scientific,
            suffix,
        } => {
            let mode = if scientific {
                DisplayMode::Scientific
            } else if suffix {
                DisplayMode::Suffix
            } else {
                config.display.mode()
            };
            handle_format(&values, mode)
        }
        Commands::Curve { curve, value, max } => {
            println!("{}", curve.apply(value, max));
            Ok(())
        }
        Commands::Lerp { from, to, perc } => {
            println!("{}", lerp(from, to, perc));
            Ok(())
        }
        Commands::Shuffle { mut items, seed } => {
            match seed {
                Some(seed) => shuffle_with(&mut items, &mut StdRng::seed_from_u64(seed)),
                None => shuffle(&mut items),
            }
            println!("{}", items.join(" "));
            Ok(())
        }
        Commands::Time => handle_time(config),
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show(config);
                Ok(())
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: gamekit config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

fn handle_format(values: &[f64], mode: DisplayMode) -> Result<()> {
    let formatter = NumberFormatter::new(mode);
    tracing::debug!("Formatting {} value(s) in {} mode", values.len(), mode.as_str());

    for &value in values {
        let formatted = formatter
            .format(value)
            .with_context(|| format!("Cannot format {value}"))?;
        println!("{formatted}");
    }
    Ok(())
}

fn handle_time(config: &Config) -> Result<()> {
    let client =
        TimeClient::new(config.time_sync.clone()).context("Failed to create HTTP client")?;
    let network = client
        .fetch()
        .with_context(|| format!("Failed to fetch time from {}", config.time_sync.url))?;

    let offset = Utc::now().signed_duration_since(network);
    println!("{}", network.to_rfc3339());
    println!("local clock offset: {:+.3}s", offset.num_milliseconds() as f64 / 1000.0);
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
