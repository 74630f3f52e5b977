//! Shape schema module
//!
//! Declarative field tables describing what a record looks like on the wire.
//!
//! # Features
//!
//! - **Kind Detection**: Classifies parsed JSON values by primitive kind
//! - **Shape Checks**: Validates required and optional fields of an object
//! - **Delegation**: Nested fields defer to the nested type's own validator
//! - **Export**: Renders field tables as JSON Schema documents

mod check;
mod export;
mod types;

pub use types::{
    FieldKind, FieldSpec, JsonSchema, JsonType, NestedCheck, RecordSchema, SchemaProperty,
};

#[cfg(test)]
mod tests;
