//! One-shot validation command.
//!
//! Values come from a JSON or YAML file and/or flags, are replayed into the
//! form as change events and then submitted.

use anyhow::{bail, Context, Result};
use clap::Args;
use formgate_core::config::Config;
use formgate_core::form::FormController;
use formgate_core::schema::{FieldName, FormValues};
use std::path::{Path, PathBuf};

use super::Capture;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ValidateArgs {
    /// Name value
    #[arg(long)]
    name: Option<String>,

    /// Email value
    #[arg(long)]
    email: Option<String>,

    /// Password value
    #[arg(long)]
    password: Option<String>,

    /// Password confirmation value
    #[arg(long)]
    confirm_password: Option<String>,

    /// JSON or YAML file with the values; flags override its entries
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn read_values(path: &Path) -> Result<FormValues> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let values = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        FormValues::from_json(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };
    Ok(values)
}

impl ValidateArgs {
    fn into_values(self) -> Result<FormValues> {
        let mut values = match &self.file {
            Some(path) => read_values(path)?,
            None => FormValues::new(),
        };

        let flags = [
            (FieldName::Name, self.name),
            (FieldName::Email, self.email),
            (FieldName::Password, self.password),
            (FieldName::ConfirmPassword, self.confirm_password),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                values.set(field, value);
            }
        }
        Ok(values)
    }
}

pub fn execute(args: ValidateArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let values = args.into_values()?;
    let mut form = FormController::from_config(config, Capture::default());

    for (field, value) in values.iter() {
        form.on_field_change(field, value);
        form.on_field_blur(field);
    }

    if let Err(errors) = form.on_submit() {
        output::print_errors(&errors, format);
        bail!("{} field(s) failed validation", errors.field_count());
    }

    if let Some(data) = form.into_handler().submitted {
        output::print_submission(&data, config.form.mask_passwords, format);
    }

    Ok(())
}
