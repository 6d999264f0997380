use serde_json::Value;

use super::scalar_to_string;

/// Print just the key answer value from the output.
///
/// For a full assessment that is the aggregate section; for any scoring
/// output the score itself, then the tier if present. Match lists print
/// one name per line.
pub fn print_minimal(value: &Value) {
    // A full assessment nests the answer under "aggregate".
    let answer = value.get("aggregate").unwrap_or(value);

    if let Value::Object(map) = answer {
        if let Some(score) = map.get("score") {
            match map.get("tier") {
                Some(tier) => println!("{} ({})", scalar_to_string(score), scalar_to_string(tier)),
                None => println!("{}", scalar_to_string(score)),
            }
            return;
        }
        // Fall back to the first field.
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_to_string(val));
            return;
        }
    }

    if let Value::Array(arr) = answer {
        for item in arr {
            println!("{}", scalar_to_string(item));
        }
        return;
    }

    println!("{}", scalar_to_string(answer));
}
