//! Catalog types
//!
//! Union definitions declared in YAML instead of Rust.

use crate::error::{Error, Result};
use crate::registry::{FieldDecoder, Resolved};
use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use crate::types::JsonObject;
use crate::union::{self, Alternative};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level catalog document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Union field definitions
    #[serde(default)]
    pub unions: Vec<UnionDef>,
}

impl Catalog {
    /// Look up a union by field name
    pub fn get(&self, field: &str) -> Option<&UnionDef> {
        self.unions.iter().find(|u| u.field == field)
    }

    /// Field names, in declaration order
    pub fn fields(&self) -> Vec<&str> {
        self.unions.iter().map(|u| u.field.as_str()).collect()
    }
}

/// One runtime-defined union field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionDef {
    /// Wire name of the field
    pub field: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Alternatives, in match order, each written as a one-key map
    /// (`scalar: string` or `record: {...}`)
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub alternatives: Vec<AlternativeDef>,
}

impl UnionDef {
    /// Decode a raw value through this union's alternatives
    pub fn decode(&self, raw: &Value) -> Result<DecodedValue> {
        union::decode_with(&self.field, raw, &self.alternatives)
    }

    /// Re-derive the alternative of a decoded value
    pub fn validate(&self, value: &DecodedValue) -> Result<String> {
        union::validate_with(&self.field, value, &self.alternatives).map(str::to_string)
    }
}

impl FieldDecoder for UnionDef {
    fn field(&self) -> &str {
        &self.field
    }

    fn alternative_labels(&self) -> Vec<String> {
        self.alternatives
            .iter()
            .map(|a| Alternative::<DecodedValue>::label(a).to_string())
            .collect()
    }

    fn resolve(&self, raw: &Value) -> Result<Resolved> {
        let decoded = self.decode(raw)?;
        Ok(Resolved {
            alternative: self.validate(&decoded)?,
            value: decoded.into_json(),
        })
    }

    fn json_schema(&self) -> JsonSchema {
        let one_of = self.alternatives.iter().map(AlternativeDef::to_property).collect();
        let root = SchemaProperty {
            title: Some(self.field.clone()),
            one_of: Some(one_of),
            ..Default::default()
        };
        match &self.description {
            Some(description) => JsonSchema::new(root.with_description(description)),
            None => JsonSchema::new(root),
        }
    }
}

/// Candidate shape of a catalog union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeDef {
    /// Bare scalar of the given kind
    Scalar(JsonType),
    /// Object with the given fields
    Record(RecordDef),
}

impl AlternativeDef {
    fn to_property(&self) -> SchemaProperty {
        match self {
            AlternativeDef::Scalar(t) => SchemaProperty::new(*t),
            AlternativeDef::Record(record) => record.to_property(),
        }
    }
}

impl Alternative<DecodedValue> for AlternativeDef {
    fn label(&self) -> &str {
        match self {
            AlternativeDef::Scalar(t) => t.as_str(),
            AlternativeDef::Record(record) => &record.name,
        }
    }

    fn attempt(&self, raw: &Value) -> Result<DecodedValue> {
        match self {
            AlternativeDef::Scalar(expected) => {
                let found = JsonType::of(raw);
                if expected.accepts(found) {
                    Ok(DecodedValue::Scalar { value: raw.clone() })
                } else {
                    Err(Error::shape_mismatch(
                        expected.as_str(),
                        format!("expected {expected}, found {found}"),
                    ))
                }
            }
            AlternativeDef::Record(record) => {
                record.check(raw)?;
                Ok(record.split(raw))
            }
        }
    }

    fn claims(&self, value: &DecodedValue) -> bool {
        match (self, value) {
            (AlternativeDef::Scalar(expected), DecodedValue::Scalar { value }) => {
                expected.matches(value)
            }
            (AlternativeDef::Record(record), DecodedValue::Record { schema, fields, .. }) => {
                *schema == record.name && record.check(&Value::Object(fields.clone())).is_ok()
            }
            _ => false,
        }
    }
}

/// Record shape declared in a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDef {
    /// Record name, reported as the alternative label
    pub name: String,

    /// Declared fields
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Check a raw value: an object whose required fields are present with
    /// the declared kind, and whose present optional fields are null or of
    /// the declared kind
    pub fn check(&self, raw: &Value) -> Result<()> {
        let Value::Object(map) = raw else {
            return Err(Error::NotAnObject {
                record: self.name.clone(),
                found: JsonType::of(raw).to_string(),
            });
        };

        for field in &self.fields {
            match map.get(&field.name) {
                None if field.required => {
                    return Err(Error::missing_field(&self.name, &field.name));
                }
                None => {}
                Some(Value::Null) if !field.required => {}
                Some(value) if field.json_type.matches(value) => {}
                Some(value) => {
                    return Err(Error::field_type(
                        &self.name,
                        &field.name,
                        field.json_type.as_str(),
                        JsonType::of(value).as_str(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Split an object into declared fields and the rest
    fn split(&self, raw: &Value) -> DecodedValue {
        let mut fields = JsonObject::new();
        let mut additional_properties = JsonObject::new();

        if let Value::Object(map) = raw {
            for (key, value) in map {
                if self.fields.iter().any(|f| &f.name == key) {
                    fields.insert(key.clone(), value.clone());
                } else {
                    additional_properties.insert(key.clone(), value.clone());
                }
            }
        }

        DecodedValue::Record {
            schema: self.name.clone(),
            fields,
            additional_properties,
        }
    }

    fn to_property(&self) -> SchemaProperty {
        let properties: BTreeMap<String, SchemaProperty> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), SchemaProperty::new(f.json_type)))
            .collect();

        SchemaProperty {
            json_type: Some(JsonType::Object),
            title: Some(self.name.clone()),
            properties: Some(properties),
            required: self
                .fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name.clone())
                .collect(),
            additional_properties: Some(true),
            ..Default::default()
        }
    }
}

/// Field of a catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Wire name
    pub name: String,

    /// Declared kind
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Whether the field must be present
    #[serde(default)]
    pub required: bool,
}

/// Value decoded through a catalog union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedValue {
    /// The raw scalar, unchanged
    Scalar { value: Value },
    /// An object matched against a record definition
    Record {
        schema: String,
        fields: JsonObject,
        additional_properties: JsonObject,
    },
}

impl DecodedValue {
    /// Re-encode as plain JSON, additional properties after declared fields
    pub fn into_json(self) -> Value {
        match self {
            DecodedValue::Scalar { value } => value,
            DecodedValue::Record {
                mut fields,
                additional_properties,
                ..
            } => {
                for (key, value) in additional_properties {
                    fields.entry(key).or_insert(value);
                }
                Value::Object(fields)
            }
        }
    }
}
