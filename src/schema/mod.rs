//! Output schemas for the generative backend.
//!
//! A [`Schema`] is serialized into the request as a hard output constraint and
//! reused locally to validate the returned document before it is decoded into
//! typed records.

mod definitions;
mod validate;

use serde_json::{json, Map, Value};

pub use definitions::{domain_analysis_schema, keyword_analysis_schema};
pub use validate::validate;

/// Structural description of an expected JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Number,
    Array(Box<Schema>),
    Object {
        /// Properties in declaration order
        properties: Vec<(&'static str, Schema)>,
        /// Names of properties that must be present
        required: Vec<&'static str>,
    },
}

impl Schema {
    pub fn object(properties: Vec<(&'static str, Schema)>, required: &[&'static str]) -> Self {
        Schema::Object {
            properties,
            required: required.to_vec(),
        }
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array(Box::new(items))
    }

    /// Type name in the backend's schema dialect.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Schema::String => "STRING",
            Schema::Number => "NUMBER",
            Schema::Array(_) => "ARRAY",
            Schema::Object { .. } => "OBJECT",
        }
    }

    /// Type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::String => "string",
            Schema::Number => "number",
            Schema::Array(_) => "array",
            Schema::Object { .. } => "object",
        }
    }

    /// Renders the schema as the `responseSchema` request field.
    pub fn to_json(&self) -> Value {
        match self {
            Schema::String | Schema::Number => json!({ "type": self.wire_type() }),
            Schema::Array(items) => json!({
                "type": self.wire_type(),
                "items": items.to_json(),
            }),
            Schema::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert((*name).to_string(), schema.to_json());
                }
                let mut object = Map::new();
                object.insert("type".into(), Value::from(self.wire_type()));
                object.insert("properties".into(), Value::Object(props));
                object.insert(
                    "propertyOrdering".into(),
                    Value::from(properties.iter().map(|(n, _)| *n).collect::<Vec<_>>()),
                );
                if !required.is_empty() {
                    object.insert("required".into(), Value::from(required.clone()));
                }
                Value::Object(object)
            }
        }
    }
}
