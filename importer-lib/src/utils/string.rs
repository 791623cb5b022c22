use serde_json::Value;

/// Normalize text by replacing control characters with spaces and collapsing whitespace
///
/// Used on header cells so that `"  Email\n"` and `"Email"` address the same column.
pub fn normalize_string(value: &str) -> String {
    value
        .chars() // Process character by character
        .map(|c| {
            if c.is_control() {
                ' ' // Replace control characters (newlines, tabs, etc.) with spaces
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Whitespace as browsers and spreadsheet exporters see it
///
/// Unicode `White_Space` without U+0085 (NEL), plus the byte order mark U+FEFF.
pub fn is_whitespace_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trim both ends using [`is_whitespace_char`]
pub fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(is_whitespace_char)
}

/// Stringify a cell value the way a spreadsheet shows it
///
/// Integral numbers print without a fractional part, blanks print as an empty string.
pub fn value_to_cell_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f)
                        if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 =>
                    {
                        (f as i64).to_string()
                    }
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
