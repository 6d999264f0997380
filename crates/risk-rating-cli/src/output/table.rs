use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten, scalar_to_string, warnings_of};

/// Format output as a table using the tabled crate. Nested output
/// sections (components, basis, aggregate) appear as dotted field paths;
/// warnings are listed after the table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(_) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (path, rendered) in flatten(value) {
                builder.push_record([path.as_str(), rendered.as_str()]);
            }
            let table = Table::from(builder);
            println!("{}", table);

            let warnings = warnings_of(value);
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for w in warnings {
                    println!("  - {}", w);
                }
            }
        }
        Value::Array(arr) => print_list(arr),
        _ => println!("{}", value),
    }
}

fn print_list(arr: &[Value]) {
    if arr.is_empty() {
        println!("(no matches)");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Match"]);
    for item in arr {
        builder.push_record([scalar_to_string(item)]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}
