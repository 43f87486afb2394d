//! Weakly-typed payload access
//!
//! Callers on the other side of a language boundary send options as a
//! string-keyed JSON object. These helpers turn individual entries into
//! typed values, reporting the payload key on failure. Numbers commonly
//! arrive as doubles, so integer fields accept floats with no fractional part.

use serde_json::{Map, Value};

use crate::domain::error::ValidationError;

pub const EXTENSION: &str = "extension";
pub const SAMPLE_RATE: &str = "sampleRate";
pub const NUMBER_OF_CHANNELS: &str = "numberOfChannels";
pub const BIT_RATE: &str = "bitRate";
pub const OUTPUT_FORMAT: &str = "outputFormat";
pub const AUDIO_ENCODER: &str = "audioEncoder";
pub const MAX_FILE_SIZE: &str = "maxFileSize";
pub const IS_METERING_ENABLED: &str = "isMeteringEnabled";
pub const AUDIO_SOURCE: &str = "audioSource";

/// Look up a key, treating `null` the same as an absent key
pub fn get<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

/// Render a JSON value for an error message (strings without quotes)
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(field: &'static str, value: &Value, expected: &'static str) -> ValidationError {
    ValidationError::WrongType {
        field,
        value: format!("{} {}", type_name(value), describe(value)),
        expected,
    }
}

pub fn as_str<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value.as_str().ok_or_else(|| wrong_type(field, value, "string"))
}

pub fn as_bool(field: &'static str, value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or_else(|| wrong_type(field, value, "boolean"))
}

pub fn as_positive_f64(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let number = value.as_f64().ok_or_else(|| wrong_type(field, value, "number"))?;
    if !number.is_finite() || number <= 0.0 {
        return Err(ValidationError::NotPositive {
            field,
            value: describe(value),
        });
    }
    Ok(number)
}

pub fn as_positive_u64(field: &'static str, value: &Value) -> Result<u64, ValidationError> {
    if let Some(n) = value.as_u64() {
        if n == 0 {
            return Err(ValidationError::NotPositive {
                field,
                value: describe(value),
            });
        }
        return Ok(n);
    }

    // Negative integers and floats end up here
    let number = as_positive_f64(field, value)?;
    if number.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger {
            field,
            value: describe(value),
        });
    }
    if number >= u64::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field,
            value: describe(value),
        });
    }
    Ok(number as u64)
}

pub fn as_positive_u32(field: &'static str, value: &Value) -> Result<u32, ValidationError> {
    let n = as_positive_u64(field, value)?;
    u32::try_from(n).map_err(|_| ValidationError::OutOfRange {
        field,
        value: describe(value),
    })
}
