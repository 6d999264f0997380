pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten an output object into (dotted-path, scalar) rows, skipping the
/// warnings array, which the formatters render separately.
pub(crate) fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into(&mut rows, "", value);
    rows
}

fn flatten_into(rows: &mut Vec<(String, String)>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if prefix.is_empty() && key == "warnings" {
                    continue;
                }
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(rows, &path, val);
            }
        }
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(scalar_to_string).collect();
            rows.push((prefix.to_string(), items.join(", ")));
        }
        other => rows.push((prefix.to_string(), scalar_to_string(other))),
    }
}

pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Pull the warnings array off an output object, if present.
pub(crate) fn warnings_of(value: &Value) -> Vec<String> {
    match value.get("warnings") {
        Some(Value::Array(warnings)) => warnings
            .iter()
            .filter_map(|w| w.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
