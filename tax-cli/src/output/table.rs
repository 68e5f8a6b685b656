use serde_json::Value;
use tabled::{Table, builder::Builder};

use super::render;

/// Render a value as text tables. Scalar fields of an object print as a
/// field/value table; array-of-object fields (the RRSP scenario sweep)
/// print as their own tables below it, and a recommendation string, when
/// present, prints last as prose.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                if key == "recommendation" || matches!(val, Value::Array(_)) {
                    continue;
                }
                builder.push_record([key.as_str(), &render(val)]);
            }
            println!("{}", Table::from(builder));

            for (key, val) in map {
                if let Value::Array(rows) = val {
                    println!("\n{key}:");
                    print_rows(rows);
                }
            }

            if let Some(Value::String(recommendation)) = map.get("recommendation") {
                println!("\n{recommendation}");
            }
        }
        Value::Array(rows) => print_rows(rows),
        _ => println!("{value}"),
    }
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", render(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|header| map.get(header.as_str()).map(render).unwrap_or_default())
                .collect();
            builder.push_record(cells);
        }
    }
    println!("{}", Table::from(builder));
}
