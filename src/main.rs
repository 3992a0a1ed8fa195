//! Lehua Trie - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the interactive menu
//! over standard input and output.

use clap::{Parser, Subcommand};
use lehua_trie_lib::cli::Session;
use lehua_trie_lib::config::{ConfigLoader, LehuaConfig, LogConfig, ENV_PREFIX};
use lehua_trie_lib::data_structures::WeightedTrie;
use lehua_trie_lib::error::{LehuaError, LehuaResult};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Lehua Trie.
#[derive(Parser, Debug)]
#[clap(name = "lehua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu
    Run,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never interleave with menu output.
fn init_logging(log: &LogConfig) -> LehuaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LehuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads configuration, logging any failure before exiting.
fn load_or_exit(loader: &ConfigLoader) -> LehuaConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(&LogConfig::default());
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> LehuaResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let config = load_or_exit(&loader);
            init_logging(&config.log)?;
            info!(
                "Trie configured with rebalance threshold {}, decay factor {}",
                config.trie.rebalance_threshold, config.trie.decay_factor
            );

            let trie = WeightedTrie::with_config(config.trie);
            let mut session = Session::new(trie, io::stdin().lock(), io::stdout().lock());
            session.run()
        }
        Command::Validate => {
            let config = load_or_exit(&loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid.");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            let default_config = LehuaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LehuaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
