//! Configuration management commands.
//!
//! The CLI reads `~/.formgate/config.toml` unless `--config` names another
//! file. `FORMGATE__*` environment variables override either.

use anyhow::{Context, Result};
use clap::Subcommand;
use formgate_core::config::Config;
use std::path::{Path, PathBuf};

use crate::output::{self, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the configuration file in use
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Configuration plus the file it came from, if any.
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Return the path to the default configuration file (`~/.formgate/config.toml`).
fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".formgate").join("config.toml"))
}

/// Load configuration from `explicit`, else from the default file when it
/// exists, else from the environment alone.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config_path().ok().filter(|path| path.exists()),
    };

    let config = match &path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::load().context("Failed to load configuration from environment")?,
    };

    Ok(LoadedConfig {
        config,
        source: path,
    })
}

pub fn execute(cmd: ConfigCommands, loaded: &LoadedConfig, format: OutputFormat) -> Result<()> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Table => {
                let content = toml::to_string_pretty(&loaded.config)
                    .context("Failed to serialize config")?;
                output::print_header("Configuration");
                println!("{}", content);
            }
            _ => output::print_item(&loaded.config, format),
        },

        ConfigCommands::Path => match &loaded.source {
            Some(path) => match format {
                OutputFormat::Table => println!("{}", path.display()),
                _ => output::print_item(&serde_json::json!({ "path": path }), format),
            },
            None => output::print_info("No configuration file in use; defaults and environment only."),
        },

        ConfigCommands::Init { force } => {
            let path = config_path()?;
            if path.exists() && !force {
                output::print_info(&format!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                ));
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let content =
                toml::to_string_pretty(&Config::default()).context("Failed to serialize config")?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            output::print_success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}
