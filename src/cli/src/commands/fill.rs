//! Interactive form screen.
//!
//! Each entered line is one change event followed by a blur, and the form is
//! redrawn after every event.

use anyhow::{Context, Result};
use formgate_core::config::Config;
use formgate_core::form::FormController;
use formgate_core::schema::FieldName;
use std::io::{self, BufRead, Write};

use super::Capture;
use crate::output::{self, OutputFormat};

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

/// Show a prompt and read one line. `None` on end of input.
fn read_line(lines: &mut Lines<'_>, prompt: &str) -> Result<Option<String>> {
    print!("{} ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    match lines.next() {
        Some(line) => {
            let line = line.context("Failed to read from stdin")?;
            Ok(Some(line.trim_end_matches('\r').to_string()))
        }
        None => Ok(None),
    }
}

fn redraw(form: &FormController<Capture>, mask: bool) {
    output::print_form(&form.fields(), form.is_valid(), mask);
}

/// Prompt for `field` and feed the answer to the form. `false` on end of input.
fn edit(form: &mut FormController<Capture>, lines: &mut Lines<'_>, field: FieldName) -> Result<bool> {
    let spec = form.schema().field(field);
    let prompt = format!("{} ({}):", spec.label, spec.placeholder);

    let Some(value) = read_line(lines, &prompt)? else {
        return Ok(false);
    };
    form.on_field_change(field, value);
    form.on_field_blur(field);
    Ok(true)
}

pub fn execute(config: &Config, format: OutputFormat) -> Result<()> {
    let mask = config.form.mask_passwords;
    let mut form = FormController::from_config(config, Capture::default());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    redraw(&form, mask);
    for field in FieldName::ALL {
        if !edit(&mut form, &mut lines, field)? {
            return Ok(());
        }
        redraw(&form, mask);
    }

    loop {
        let Some(command) = read_line(&mut lines, "Field to edit, 'submit' or 'quit':")? else {
            return Ok(());
        };

        match command.trim() {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "submit" => {
                if !form.is_valid() {
                    output::print_info("Submit is disabled until every field is valid.");
                    redraw(&form, mask);
                    continue;
                }
                if form.on_submit().is_err() {
                    redraw(&form, mask);
                    continue;
                }
                break;
            }
            other => match other.parse::<FieldName>() {
                Ok(field) => {
                    if !edit(&mut form, &mut lines, field)? {
                        return Ok(());
                    }
                    redraw(&form, mask);
                }
                Err(e) => output::print_error(&e.to_string()),
            },
        }
    }

    if let Some(data) = form.into_handler().submitted {
        output::print_submission(&data, mask, format);
    }

    Ok(())
}
