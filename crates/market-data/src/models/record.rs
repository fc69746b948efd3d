use serde_json::{Map, Value};

/// One row of provider data, keyed by the upstream column header.
///
/// Spreadsheet numbers stay numbers, blank cells are `null`, text stays text.
pub type Record = Map<String, Value>;

/// Convert a raw text cell into a record value.
///
/// Whitespace-only text is `null`. Anything else is kept as trimmed text so
/// codes such as `"00005"` keep their leading zeros.
pub fn text_value(text: &str) -> Value {
    let text = text.trim();
    if text.is_empty() {
        Value::Null
    } else {
        Value::String(text.to_string())
    }
}

/// Render a cell as text for matching (headers, stock codes, dates).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
