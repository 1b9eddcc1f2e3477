//! Output formatting utilities for the Formgate CLI.
//!
//! Supports table, JSON, and YAML output formats, plus the form screen.

use clap::ValueEnum;
use colored::*;
use formgate_core::form::{FieldView, MASK};
use formgate_core::schema::{FieldName, SignupData};
use formgate_core::validation::ValidationErrors;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Output format selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Render as a formatted table
    #[default]
    Table,
    /// Render as JSON
    Json,
    /// Render as YAML
    Yaml,
}

/// Print a success message to stdout.
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print an informational message to stdout.
pub fn print_info(msg: &str) {
    println!("{} {}", "[INFO]".blue().bold(), msg);
}

/// Print a list of items in the requested format.
///
/// For table output, items must implement `Tabled`. For JSON/YAML, items must
/// implement `Serialize`.
pub fn print_list<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No results found.".dimmed());
                return;
            }
            let table = Table::new(items)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).expect("serialize to JSON");
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(items).expect("serialize to YAML");
            print!("{}", yaml);
        }
    }
}

/// Print a single item in the requested format.
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).expect("serialize to JSON");
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(item).expect("serialize to YAML");
            print!("{}", yaml);
        }
    }
}

/// Print key-value details to the terminal (non-JSON/YAML output).
pub fn print_detail(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

// ── Form screen ─────────────────────────────────────────────────────────────

/// Draw every input with its value or placeholder, its inline error and the
/// submit button.
pub fn print_form(views: &[FieldView<'_>], submit_enabled: bool, mask: bool) {
    print_header("Sign up");

    for view in views {
        let label = format!("{:<18}", view.spec.label);
        let shown = match view.display_value(mask).filter(|v| !v.is_empty()) {
            Some(value) => value.normal(),
            None => view.spec.placeholder.dimmed(),
        };
        println!("  {} [{}]", label.cyan(), shown);

        if let Some(error) = view.error {
            println!("  {:<18} {}", "", error.message.red());
        }
    }

    println!();
    if submit_enabled {
        println!("  {}", "[ Sign up ]".green().bold());
    } else {
        println!("  {} {}", "[ Sign up ]".dimmed(), "(disabled)".dimmed());
    }
    println!();
}

// ── Validation results ──────────────────────────────────────────────────────

#[derive(Debug, Serialize, Tabled)]
struct ErrorRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Error")]
    code: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Print validation errors, one row per failure, in field order.
pub fn print_errors(errors: &ValidationErrors, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ErrorRow> = FieldName::ALL
                .into_iter()
                .flat_map(|field| {
                    errors
                        .get(field.as_str())
                        .into_iter()
                        .flatten()
                        .map(move |error| ErrorRow {
                            field: field.to_string(),
                            code: error.kind.code().to_string(),
                            message: error.message.clone(),
                        })
                })
                .collect();
            print_list(&rows, format);
        }
        _ => print_item(errors, format),
    }
}

#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct SubmissionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Password")]
    password: String,
}

/// Print an accepted sign-up record.
pub fn print_submission(data: &SignupData, mask: bool, format: OutputFormat) {
    let row = SubmissionRow {
        name: data.name.clone(),
        email: data.email.clone(),
        password: if mask {
            MASK.to_string()
        } else {
            data.password.clone()
        },
    };

    match format {
        OutputFormat::Table => {
            print_success(&format!("Signed up {} <{}>", row.name, row.email));
            print_list(&[row], format);
        }
        _ => print_item(&row, format),
    }
}
