//! Structural validation of remote build documents.
//!
//! [`validate`] walks a raw JSON document against [`build_shape`], rejecting
//! the first missing field or kind mismatch with its path. The walk produces
//! a normalized copy (whole-number floats become integers, unknown properties
//! are dropped) which is then decoded into a typed [`Build`]. Nothing is
//! repaired: a document either passes as-is or is rejected.

use serde_json::{Map, Value};

use architect_types::build::Build;
use architect_types::error::ValidationError;

use super::shape::{Shape, build_shape};

/// Validate a raw document and decode it into a [`Build`].
///
/// The returned build has no image attached.
pub fn validate(raw: &Value) -> Result<Build, ValidationError> {
    let normalized = check(build_shape(), raw, "")?;
    let mut build: Build = serde_json::from_value(normalized).map_err(|e| ValidationError::Decode {
        path: "$".to_string(),
        message: e.to_string(),
    })?;
    build.image_url = None;
    Ok(build)
}

fn check(shape: &Shape, value: &Value, path: &str) -> Result<Value, ValidationError> {
    match shape {
        Shape::String => match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(mismatch(shape, other, path)),
        },
        Shape::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(mismatch(shape, other, path)),
        },
        Shape::Integer => whole_number(shape, value, path).map(Value::from),
        Shape::Count => {
            let n = whole_number(shape, value, path)?;
            if n < 0 || n > i64::from(u32::MAX) {
                return Err(ValidationError::OutOfRange {
                    path: label(path),
                    value: n.to_string(),
                });
            }
            Ok(Value::from(n))
        }
        Shape::Array(items) => match value {
            Value::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| check(items, element, &format!("{}[{i}]", label(path))))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => Err(mismatch(shape, other, path)),
        },
        Shape::Object(fields) => {
            let Value::Object(map) = value else {
                return Err(mismatch(shape, value, path));
            };
            let mut normalized = Map::new();
            for field in fields {
                let field_path = child(path, field.name);
                match map.get(field.name) {
                    None | Some(Value::Null) if !field.required => continue,
                    None => return Err(ValidationError::MissingField { path: field_path }),
                    Some(v) => {
                        normalized.insert(field.name.to_string(), check(&field.shape, v, &field_path)?);
                    }
                }
            }
            Ok(Value::Object(normalized))
        }
    }
}

/// Accept integers, and floats with no fractional part.
fn whole_number(shape: &Shape, value: &Value, path: &str) -> Result<i64, ValidationError> {
    let Value::Number(number) = value else {
        return Err(mismatch(shape, value, path));
    };
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.is_u64() {
        return Err(ValidationError::OutOfRange {
            path: label(path),
            value: number.to_string(),
        });
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
            if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                Err(ValidationError::OutOfRange {
                    path: label(path),
                    value: number.to_string(),
                })
            } else {
                Ok(f as i64)
            }
        }
        _ => Err(ValidationError::NotWholeNumber {
            path: label(path),
            value: number.to_string(),
        }),
    }
}

fn mismatch(shape: &Shape, found: &Value, path: &str) -> ValidationError {
    ValidationError::TypeMismatch {
        path: label(path),
        expected: shape.kind_name(),
        found: value_kind(found),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn child(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn label(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}
