//! Configuration management.
//!
//! Settings come from an optional TOML file layered under `FORMGATE__*`
//! environment variables, e.g. `FORMGATE__FORM__MODE=on_blur`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::form::ValidationMode;

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Form behaviour
    #[serde(default)]
    pub form: FormConfig,

    /// Error message overrides
    #[serde(default)]
    pub messages: MessageConfig,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// When a field's error becomes visible
    #[serde(default)]
    pub mode: ValidationMode,

    /// Mask password values when rendering the form
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            mask_passwords: default_mask_passwords(),
        }
    }
}

/// Messages attached to the four validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Shown for a required field that was never filled in
    #[serde(default = "default_required")]
    pub required: String,

    #[serde(default = "default_name_required")]
    pub name_required: String,

    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,

    #[serde(default = "default_password_too_short")]
    pub password_too_short: String,

    #[serde(default = "default_password_mismatch")]
    pub password_mismatch: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
            name_required: default_name_required(),
            invalid_email: default_invalid_email(),
            password_too_short: default_password_too_short(),
            password_mismatch: default_password_mismatch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
        }
    }
}

// Default value functions
fn default_mask_passwords() -> bool { true }
fn default_required() -> String { "This field is required".to_string() }
fn default_name_required() -> String { "Name is required".to_string() }
fn default_invalid_email() -> String { "Invalid email address".to_string() }
fn default_password_too_short() -> String { "Password must be at least 8 characters".to_string() }
fn default_password_mismatch() -> String { "Passwords do not match".to_string() }
fn default_log_level() -> String { "warn".to_string() }
fn default_json_logging() -> bool { false }

impl Config {
    /// Load configuration from the environment only.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("FORMGATE").separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }

    /// Load from a specific file path, with environment overrides on top.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("FORMGATE").separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }
}
