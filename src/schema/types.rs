//! Schema types
//!
//! Primitive JSON kinds, the declarative field tables records are checked
//! against, and the JSON Schema documents those tables export to.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::Result;

/// JSON primitive kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    /// Kind of a parsed JSON value. Whole numbers report as `Integer`.
    pub fn of(value: &Value) -> JsonType {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => JsonType::Integer,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    /// Check if a value of kind `found` satisfies this declared kind
    pub fn accepts(&self, found: JsonType) -> bool {
        match (self, found) {
            (a, b) if *a == b => true,
            // Integer is a refinement of Number
            (JsonType::Number, JsonType::Integer) => true,
            _ => false,
        }
    }

    /// Check a value directly
    pub fn matches(&self, value: &Value) -> bool {
        self.accepts(JsonType::of(value))
    }

    /// Lowercase name, as used in JSON Schema
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Integer => "integer",
            JsonType::Boolean => "boolean",
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::Null => "null",
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field Tables
// ============================================================================

/// Validator a nested field delegates to
pub type NestedCheck = fn(&Value) -> Result<()>;

/// Declared kind of one record field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A plain JSON kind
    Primitive(JsonType),
    /// `YYYY-MM-DD` string
    Date,
    /// RFC 3339 timestamp string
    DateTime,
    /// String restricted to a closed set of wire codes
    Enum {
        name: &'static str,
        codes: &'static [&'static str],
    },
    /// Value validated by another type's own validator
    Nested {
        name: &'static str,
        check: NestedCheck,
    },
    /// Array whose items all have the inner kind
    ListOf(&'static FieldKind),
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Primitive(t) => write!(f, "{t}"),
            FieldKind::Date => write!(f, "date"),
            FieldKind::DateTime => write!(f, "date-time"),
            FieldKind::Enum { name, .. } => write!(f, "enum {name}"),
            FieldKind::Nested { name, .. } => write!(f, "{name}"),
            FieldKind::ListOf(inner) => write!(f, "list of {inner}"),
        }
    }
}

/// One entry of a record's field table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Declared kind
    pub kind: FieldKind,
    /// Whether the field must be present for the shape to match
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present and non-null
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A field checked only when present and non-null
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Ordered field table of one record type
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    /// Record type name
    pub name: &'static str,
    /// Declared fields, in wire order
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Create a schema from a static field table
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Look up a declared field
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Required fields, in declaration order
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

// ============================================================================
// JSON Schema Documents
// ============================================================================

/// JSON Schema node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Property type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub json_type: Option<JsonType>,

    /// Title (record name for object nodes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Format hint (e.g., "date", "date-time")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaProperty>>,

    /// Required properties (for objects)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Additional properties allowed (for objects)
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,

    /// Enum values (for strings with known values)
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    /// Ordered alternatives (for union fields)
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaProperty>>,
}

impl SchemaProperty {
    /// Create a property with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type: Some(json_type),
            ..Default::default()
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Full JSON Schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema version
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Root node
    #[serde(flatten)]
    pub root: SchemaProperty,
}

impl JsonSchema {
    /// Wrap a root node in a draft-07 document
    pub fn new(root: SchemaProperty) -> Self {
        Self {
            schema: "http://json-schema.org/draft-07/schema#".to_string(),
            root,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
