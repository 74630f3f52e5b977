//! Union decoding engine
//!
//! Ordered first-match over a declared list of alternatives.

use super::types::{Alternative, UnionField};
use crate::error::{Error, Result};
use crate::schema::{JsonSchema, JsonType, SchemaProperty};
use serde_json::Value;
use tracing::{debug, trace};

/// Resolve a raw value into the first alternative that accepts it
///
/// Alternatives are tried in declared order. A rejected predicate or a
/// failed construction moves on to the next alternative; only exhausting
/// the list is an error.
pub fn decode_with<T, A>(field: &str, raw: &Value, alternatives: &[A]) -> Result<T>
where
    A: Alternative<T>,
{
    for alternative in alternatives {
        match alternative.attempt(raw) {
            Ok(value) => {
                debug!(field, alternative = alternative.label(), "Union field resolved");
                return Ok(value);
            }
            Err(e) => {
                trace!(
                    field,
                    alternative = alternative.label(),
                    reason = %e,
                    "Alternative rejected"
                );
            }
        }
    }

    let found = JsonType::of(raw);
    debug!(field, %found, tried = alternatives.len(), "No alternative matched");
    Err(Error::no_match(field, found.as_str()))
}

/// Find which alternative an in-memory value belongs to
///
/// Returns the label of the first alternative that claims the value.
pub fn validate_with<'a, T, A>(field: &str, value: &T, alternatives: &'a [A]) -> Result<&'a str>
where
    A: Alternative<T>,
{
    alternatives
        .iter()
        .find(|alternative| alternative.claims(value))
        .map(|alternative| alternative.label())
        .ok_or_else(|| {
            debug!(field, "Value claimed by no alternative");
            Error::no_match(field, "in-memory")
        })
}

/// Decode a typed union field from a parsed JSON value
pub fn decode<T: UnionField>(raw: &Value) -> Result<T> {
    decode_with(T::FIELD, raw, T::alternatives())
}

/// Decode a typed union field from JSON text
pub fn decode_str<T: UnionField>(text: &str) -> Result<T> {
    let raw: Value = serde_json::from_str(text)?;
    decode(&raw)
}

/// Re-derive the alternative of a typed union value
pub fn validate<T: UnionField>(value: &T) -> Result<&'static str> {
    validate_with(T::FIELD, value, T::alternatives())
}

/// JSON Schema document listing a typed union's alternatives in match order
pub fn union_schema<T: UnionField>() -> JsonSchema {
    let one_of = T::alternatives()
        .iter()
        .map(|variant| variant.kind().to_property())
        .collect();

    JsonSchema::new(SchemaProperty {
        title: Some(T::FIELD.to_string()),
        one_of: Some(one_of),
        ..Default::default()
    })
}

/// Extract the string of a raw value already known to be a JSON string
pub fn string_value(raw: &Value) -> Result<String> {
    raw.as_str().map(str::to_owned).ok_or_else(|| {
        Error::shape_mismatch(
            JsonType::String.as_str(),
            format!("found {}", JsonType::of(raw)),
        )
    })
}
