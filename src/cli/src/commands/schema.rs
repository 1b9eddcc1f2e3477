//! Schema inspection command.

use anyhow::Result;
use formgate_core::config::Config;
use formgate_core::schema::{InputType, SignupSchema};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Type")]
    input_type: String,
    #[tabled(rename = "Required")]
    required: bool,
    #[tabled(rename = "Constraints")]
    constraints: String,
    #[tabled(rename = "Placeholder")]
    placeholder: String,
}

fn input_type_label(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Text => "text",
        InputType::Email => "email",
        InputType::Password => "password",
    }
}

pub fn execute(config: &Config, format: OutputFormat) -> Result<()> {
    let schema = SignupSchema::with_messages(&config.messages);

    match format {
        OutputFormat::Table => {
            let rows: Vec<FieldRow> = schema
                .fields()
                .iter()
                .map(|spec| FieldRow {
                    field: spec.name.to_string(),
                    label: spec.label.clone(),
                    input_type: input_type_label(spec.input_type).to_string(),
                    required: spec.required,
                    constraints: spec
                        .constraints
                        .iter()
                        .map(|c| c.rule.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    placeholder: spec.placeholder.clone(),
                })
                .collect();
            output::print_list(&rows, format);

            output::print_header("Cross-field rules");
            for refinement in schema.refinements() {
                output::print_detail(
                    refinement.path.as_str(),
                    &format!(
                        "{} must equal {} ({})",
                        refinement.field, refinement.equals, refinement.message
                    ),
                );
            }
        }
        _ => output::print_item(
            &serde_json::json!({
                "fields": schema.fields(),
                "refinements": schema.refinements(),
            }),
            format,
        ),
    }

    Ok(())
}
