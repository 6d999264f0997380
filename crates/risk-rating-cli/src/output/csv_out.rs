use serde_json::Value;
use std::io;

use super::{flatten, scalar_to_string};

/// Write output as CSV to stdout: field,value rows for objects, a single
/// column for match lists.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(_) => {
            let _ = wtr.write_record(["field", "value"]);
            for (path, rendered) in flatten(value) {
                let _ = wtr.write_record([path.as_str(), rendered.as_str()]);
            }
        }
        Value::Array(arr) => {
            let _ = wtr.write_record(["match"]);
            for item in arr {
                let _ = wtr.write_record([scalar_to_string(item)]);
            }
        }
        _ => {
            let _ = wtr.write_record([scalar_to_string(value)]);
        }
    }

    let _ = wtr.flush();
}
