//! Required-field validation of backend documents.
//!
//! Required fields and array items are type-checked; optional object
//! properties are left to the lenient decoders of the record types. A
//! required array that is absent or `null` is normalized to `[]` in place.

use serde_json::Value;

use super::Schema;
use crate::error_handling::{ValidationError, ValidationReason};

/// Validates `document` against `schema`, normalizing absent required arrays.
pub fn validate(schema: &Schema, document: &mut Value) -> Result<(), ValidationError> {
    check(schema, document, "")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn wrong_type(path: &str, schema: &Schema, value: &Value) -> ValidationError {
    ValidationError {
        path: if path.is_empty() {
            "(root)".to_string()
        } else {
            path.to_string()
        },
        reason: ValidationReason::WrongType {
            expected: schema.type_name(),
            found: json_type_name(value),
        },
    }
}

fn check(schema: &Schema, value: &mut Value, path: &str) -> Result<(), ValidationError> {
    match schema {
        Schema::String if value.is_string() => Ok(()),
        Schema::Number if value.is_number() => Ok(()),
        Schema::String | Schema::Number => Err(wrong_type(path, schema, value)),
        Schema::Array(items) => {
            let Value::Array(elements) = value else {
                return Err(wrong_type(path, schema, value));
            };
            for (index, element) in elements.iter_mut().enumerate() {
                check(items, element, &format!("{path}[{index}]"))?;
            }
            Ok(())
        }
        Schema::Object {
            properties,
            required,
        } => {
            let Value::Object(map) = value else {
                return Err(wrong_type(path, schema, value));
            };
            for (name, property) in properties {
                if !required.contains(name) {
                    continue;
                }
                let child_path = field_path(path, name);
                let present = map.get(*name).is_some_and(|child| !child.is_null());
                if present {
                    if let Some(child) = map.get_mut(*name) {
                        check(property, child, &child_path)?;
                    }
                } else if matches!(property, Schema::Array(_)) {
                    log::debug!("Defaulting absent list {child_path} to empty");
                    map.insert((*name).to_string(), Value::Array(Vec::new()));
                } else {
                    return Err(ValidationError {
                        path: child_path,
                        reason: ValidationReason::Missing,
                    });
                }
            }
            Ok(())
        }
    }
}
