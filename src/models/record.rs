//! Record codec
//!
//! Shape-checked JSON decoding and encoding for flat record types, with an
//! explicit bag for keys the record does not declare.

use crate::error::{Error, Result};
use crate::schema::RecordSchema;
use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A record type of the accounting API
///
/// Implementors derive `Serialize`/`Deserialize` over their typed fields
/// only and keep `additional_properties` out of serde (`#[serde(skip)]`).
/// Every typed field must be declared in [`Record::SCHEMA`], which is also
/// how undeclared keys are told apart.
pub trait Record: Serialize + DeserializeOwned {
    /// Field table used for shape checks
    const SCHEMA: &'static RecordSchema;

    /// Keys of the source object the record does not declare
    fn additional_properties(&self) -> &JsonObject;

    /// Mutable access to the undeclared keys
    fn additional_properties_mut(&mut self) -> &mut JsonObject;

    /// Check a raw value against this record's schema without decoding it
    fn validate_shape(raw: &Value) -> Result<()> {
        Self::SCHEMA.check(raw)
    }

    /// Decode from a parsed JSON value
    ///
    /// Fails with the schema error if the shape does not match; undeclared
    /// keys are kept in the additional-properties bag.
    fn from_json(raw: &Value) -> Result<Self> {
        Self::validate_shape(raw)?;

        let mut record = Self::deserialize(raw)
            .map_err(|e| Error::decode(Self::SCHEMA.name, e.to_string()))?;
        *record.additional_properties_mut() = undeclared_keys(Self::SCHEMA, raw);
        Ok(record)
    }

    /// Decode from JSON text
    fn from_json_str(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_json(&raw)
    }

    /// Encode the declared fields only
    fn to_typed_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Encode the declared fields plus the additional-properties bag
    ///
    /// A bag key that shadows a declared field is dropped; the typed value
    /// wins.
    fn to_json(&self) -> Value {
        let mut value = self.to_typed_json();
        if let Value::Object(map) = &mut value {
            for (key, extra) in self.additional_properties() {
                map.entry(key.clone()).or_insert_with(|| extra.clone());
            }
        }
        value
    }

    /// Check that the in-memory value still has this record's shape
    fn conforms(&self) -> bool {
        Self::SCHEMA.matches(&self.to_typed_json())
    }
}

/// Copy the keys of `raw` that `schema` does not declare
pub fn undeclared_keys(schema: &RecordSchema, raw: &Value) -> JsonObject {
    raw.as_object()
        .map(|map| {
            map.iter()
                .filter(|(key, _)| !schema.has_field(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Deserialize `null` as the type's default (used for list fields)
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
