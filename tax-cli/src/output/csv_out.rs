use std::io;

use serde_json::Value;

use super::render;

/// Write the value as CSV to stdout. An object carrying a scenario sweep
/// emits the sweep rows; any other object emits field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("scenarios") {
                write_rows(&mut writer, rows);
            } else {
                let _ = writer.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = writer.write_record([key.as_str(), &render(val)]);
                }
            }
        }
        Value::Array(rows) => write_rows(&mut writer, rows),
        _ => {
            let _ = writer.write_record([render(value)]);
        }
    }

    let _ = writer.flush();
}

fn write_rows(writer: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    if rows.is_empty() {
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = writer.write_record([render(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = writer.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|header| map.get(*header).map(render).unwrap_or_default())
                .collect();
            let _ = writer.write_record(&cells);
        }
    }
}
