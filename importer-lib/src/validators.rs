//! Per-field rules for the four contact columns.
//!
//! Each predicate takes the raw cell (`None` when the column is absent from the row)
//! and never fails: a missing or malformed cell simply returns `false`.

use serde_json::Value;

use crate::utils::{is_whitespace_char, trim_whitespace, value_to_cell_string};

const MIN_PHONE_LENGTH: usize = 10;

/// Name must be a text cell that is not blank after trimming
pub fn validate_name(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !trim_whitespace(s).is_empty())
}

/// Email must look like `local@domain.tld` with no whitespace and a single `@`
pub fn validate_email(value: Option<&Value>) -> bool {
    match value {
        Some(v @ (Value::String(_) | Value::Number(_))) => looks_like_email(&value_to_cell_string(v)),
        _ => false,
    }
}

/// Phone must be numeric and at least ten characters once stringified
pub fn validate_phone(value: Option<&Value>) -> bool {
    let text = match value {
        Some(v @ Value::Number(n)) => {
            if !n.as_f64().is_some_and(f64::is_finite) {
                return false;
            }
            value_to_cell_string(v)
        }
        Some(Value::String(s)) => {
            let trimmed = trim_whitespace(s);
            if !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
                return false;
            }
            trimmed.to_string()
        }
        _ => return false,
    };

    text.chars().count() >= MIN_PHONE_LENGTH
}

/// Gender must be `M` or `F`, in either case
pub fn validate_gender(value: Option<&Value>) -> bool {
    match value {
        Some(v @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
            matches!(value_to_cell_string(v).to_uppercase().as_str(), "M" | "F")
        }
        _ => false,
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(is_whitespace_char) {
        return false;
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
