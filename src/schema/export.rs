//! JSON Schema export of record field tables

use super::types::{FieldKind, JsonSchema, JsonType, RecordSchema, SchemaProperty};
use serde_json::Value;
use std::collections::BTreeMap;

impl FieldKind {
    /// JSON Schema node describing this kind
    pub fn to_property(&self) -> SchemaProperty {
        match self {
            FieldKind::Primitive(t) => SchemaProperty::new(*t),
            FieldKind::Date => SchemaProperty::new(JsonType::String).with_format("date"),
            FieldKind::DateTime => SchemaProperty::new(JsonType::String).with_format("date-time"),
            FieldKind::Enum { name, codes } => SchemaProperty {
                json_type: Some(JsonType::String),
                title: Some((*name).to_string()),
                enum_values: Some(codes.iter().map(|c| Value::String((*c).to_string())).collect()),
                ..Default::default()
            },
            // Nested shapes are owned by their own type; reference them by name
            FieldKind::Nested { name, .. } => SchemaProperty {
                title: Some((*name).to_string()),
                ..Default::default()
            },
            FieldKind::ListOf(inner) => SchemaProperty {
                json_type: Some(JsonType::Array),
                items: Some(Box::new(inner.to_property())),
                ..Default::default()
            },
        }
    }
}

impl RecordSchema {
    /// Object node for this record, open to additional properties
    pub fn to_property(&self) -> SchemaProperty {
        let properties: BTreeMap<String, SchemaProperty> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.kind.to_property()))
            .collect();

        SchemaProperty {
            json_type: Some(JsonType::Object),
            title: Some(self.name.to_string()),
            properties: Some(properties),
            required: self.required_fields().map(|f| f.name.to_string()).collect(),
            additional_properties: Some(true),
            ..Default::default()
        }
    }

    /// Standalone draft-07 document for this record
    pub fn to_json_schema(&self) -> JsonSchema {
        JsonSchema::new(self.to_property())
    }
}
