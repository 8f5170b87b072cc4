//! `deskpet config` - create and locate the configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{self, PetConfig};
use crate::error::DeskpetError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Write a commented template holding every option at its default.
    ///
    /// The file goes to `--path`, else to the global `--config` path, else to
    /// the first search location.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  deskpet config init                           # First search location
  deskpet config init --path ./pet.jsonc        # Explicit destination
  deskpet --config ./pet.jsonc config init -f   # Overwrite the override file
  deskpet config init --stdout                  # Print the template only"#
    )]
    Init {
        /// Replace an existing file.
        #[arg(long, short)]
        force: bool,

        /// Destination of the new file.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the template instead of writing it.
        #[arg(long)]
        stdout: bool,
    },

    /// Show which configuration file a run would load.
    ///
    /// Honours the global `--config` override and checks that the file
    /// parses.
    Path,
}

/// Execute config subcommands. `custom` is the global `--config` value.
///
/// # Errors
///
/// Returns an error if the template cannot be written or the active file
/// cannot be loaded.
pub fn execute(cmd: &ConfigCommands, custom: Option<&Path>) -> Result<(), DeskpetError> {
    match cmd {
        ConfigCommands::Init { stdout: true, .. } => {
            print!("{}", generate_config_template());
            Ok(())
        }
        ConfigCommands::Init { force, path, .. } => {
            let destination = init_destination(path.as_deref(), custom);
            write_template(&destination, *force)?;
            println!("{} {}", "Created".green().bold(), destination.display());
            println!("{}", "Every option is commented out; the defaults apply until edited.".dimmed());
            Ok(())
        }
        ConfigCommands::Path => show_active(custom),
    }
}

/// Where `config init` writes: `--path`, then `--config`, then the first
/// search location.
fn init_destination(path: Option<&Path>, custom: Option<&Path>) -> PathBuf {
    path.or(custom).map_or_else(
        || {
            config::config_paths()
                .into_iter()
                .next()
                .unwrap_or_else(|| PathBuf::from("config.jsonc"))
        },
        Path::to_path_buf,
    )
}

/// Writes the template, refusing to replace a file unless `force` is set.
fn write_template(destination: &Path, force: bool) -> Result<(), DeskpetError> {
    if destination.exists() && !force {
        return Err(DeskpetError::ConfigError(format!(
            "{} already exists (use --force to replace it)",
            destination.display()
        )));
    }
    create_config_file(destination).map_err(|e| {
        DeskpetError::ConfigError(format!("Failed to write {}: {e}", destination.display()))
    })?;
    tracing::info!(path = %destination.display(), "configuration template written");
    Ok(())
}

/// The file a run would load, with the loaded configuration.
fn active_config(custom: Option<&Path>) -> Result<(Option<PathBuf>, PetConfig), DeskpetError> {
    let (config, path) = config::load_or_default(custom)?;
    Ok((path, config))
}

fn show_active(custom: Option<&Path>) -> Result<(), DeskpetError> {
    match active_config(custom)? {
        (Some(path), config) => {
            let marker = if config == PetConfig::default() { " (all defaults)" } else { "" };
            println!("{} {}{}", "Active:".bold(), path.display(), marker.dimmed());
        }
        (None, _) => {
            let missing = custom.map_or_else(String::new, |p| format!(" at {}", p.display()));
            println!("{} no file{missing}, defaults in use", "Active:".bold());
        }
    }

    if custom.is_none() {
        println!("\n{}", "Search order:".bold());
        for (i, path) in config::config_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.display());
        }
    }
    Ok(())
}
