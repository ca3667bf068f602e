// Dynamic field checks for untyped (JSON) input
//
// The typed API cannot express a wrong-kind value; these helpers are where
// "name must be a string" and "royalties must be an integer" are enforced.

use crate::error::{Field, ValidationError};
use serde_json::Value;

/// Longest rendering of an offending value kept in an error message
const MAX_REFERENCE_CHARS: usize = 64;

pub(crate) fn expect_string(field: Field, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        _ => Err(ValidationError::NotAString { field }),
    }
}

/// Only JSON integers that fit in `i64` pass; `1.0` is a float and fails.
/// Integers above `i64::MAX` are reported as out of range.
pub(crate) fn expect_integer(field: Field, value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Number(number) => match (number.as_i64(), number.as_u64()) {
            (Some(n), _) => Ok(n),
            (None, Some(_)) => Err(ValidationError::OutOfRange { field }),
            (None, None) => Err(ValidationError::NotAnInteger { field }),
        },
        _ => Err(ValidationError::NotAnInteger { field }),
    }
}

/// Short printable form of a value for error messages
pub(crate) fn describe(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > MAX_REFERENCE_CHARS {
        let mut truncated: String = rendered.chars().take(MAX_REFERENCE_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        rendered
    }
}
