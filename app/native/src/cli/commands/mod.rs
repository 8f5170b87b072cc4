//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `resolve` - One stacking pass over a scene
//! - `simulate` - Headless simulation over a scene

use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::{self, PetConfig};
use crate::error::DeskpetError;

pub mod config_cmd;
pub mod resolve;
pub mod simulate;

pub use config_cmd::ConfigCommands;
pub use resolve::ResolveArgs;
pub use simulate::SimulateArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deskpet CLI - physics and window stacking for desktop pets.
#[derive(Parser, Debug)]
#[command(name = "deskpet")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run the pet headless against a scene file.
    ///
    /// Loads monitors and windows from a JSON scene, advances the simulation
    /// frame by frame and prints the resulting window trajectory.
    Simulate(SimulateArgs),

    /// Run a single stacking pass over a scene file.
    ///
    /// Prints the barriers, point charges and stack target the pet would
    /// derive from the scene's window list.
    Resolve(ResolveArgs),

    /// Configuration file management commands.
    ///
    /// Initialize and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Deskpet configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Deskpet configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(deskpet completions --shell zsh)"
    ///   deskpet completions --shell bash > ~/.local/share/bash-completion/completions/deskpet
    ///   deskpet completions --shell fish > ~/.config/fish/completions/deskpet.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), DeskpetError> {
        let config_path = self.config_path();

        match &self.command {
            Commands::Simulate(args) => simulate::execute(args, &load_config(config_path.as_deref())?),
            Commands::Resolve(args) => resolve::execute(args, &load_config(config_path.as_deref())?),
            // Config commands inspect or create the file, so it may be missing.
            Commands::Config(cmd) => config_cmd::execute(cmd, config_path.as_deref()),

            Commands::Schema => {
                require_existing(config_path.as_deref())?;
                let schema = config::schema_json()
                    .map_err(|e| DeskpetError::OutputError(format!("Failed to build schema: {e}")))?;
                println!("{schema}");
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "deskpet", &mut io::stdout());
    }
}

/// Fails when `--config` names a file that does not exist.
fn require_existing(path: Option<&Path>) -> Result<(), DeskpetError> {
    match path.filter(|path| !path.exists()) {
        Some(path) => Err(DeskpetError::ConfigError(format!(
            "Configuration file not found: {}",
            path.display()
        ))),
        None => Ok(()),
    }
}

fn load_config(path: Option<&Path>) -> Result<PetConfig, DeskpetError> {
    require_existing(path)?;
    Ok(config::load_or_default(path)?.0)
}
