//! Union types and traits
//!
//! Defines the alternative abstraction the decoder iterates over and the
//! static alternative tables backing the typed union fields.

use crate::error::{Error, Result};
use crate::schema::{JsonType, RecordSchema, SchemaProperty};
use serde_json::Value;

/// Candidate shape of a union field
#[derive(Debug, Clone, Copy)]
pub enum AlternativeKind {
    /// Bare JSON scalar of the given kind, kept as-is
    Scalar(JsonType),
    /// Object satisfying a record's field table
    Record(&'static RecordSchema),
}

impl AlternativeKind {
    /// Human-readable name of the shape ("string", "AccountingPeriod")
    pub fn label(&self) -> &'static str {
        match self {
            AlternativeKind::Scalar(t) => t.as_str(),
            AlternativeKind::Record(schema) => schema.name,
        }
    }

    /// Evaluate the match predicate against a raw value
    pub fn check(&self, raw: &Value) -> Result<()> {
        match self {
            AlternativeKind::Scalar(expected) => {
                let found = JsonType::of(raw);
                if expected.accepts(found) {
                    Ok(())
                } else {
                    Err(Error::shape_mismatch(
                        expected.as_str(),
                        format!("expected {expected}, found {found}"),
                    ))
                }
            }
            AlternativeKind::Record(schema) => schema.check(raw),
        }
    }

    /// JSON Schema node for this shape
    pub fn to_property(&self) -> SchemaProperty {
        match self {
            AlternativeKind::Scalar(t) => SchemaProperty::new(*t),
            AlternativeKind::Record(schema) => schema.to_property(),
        }
    }
}

/// One candidate shape that a raw JSON value may resolve to
pub trait Alternative<T> {
    /// Name reported in logs and listings
    fn label(&self) -> &str;

    /// Run the match predicate and, if it passes, construct the value.
    ///
    /// The error describes why this alternative was rejected; the decoder
    /// treats it as "try the next one".
    fn attempt(&self, raw: &Value) -> Result<T>;

    /// Check whether an already-built value has this alternative's shape
    fn claims(&self, value: &T) -> bool;

    /// Pure first-match form of [`Alternative::attempt`]
    fn try_match(&self, raw: &Value) -> Option<T> {
        self.attempt(raw).ok()
    }
}

/// Statically declared alternative of a typed union
pub struct Variant<T> {
    kind: AlternativeKind,
    build: fn(&Value) -> Result<T>,
    claim: fn(&T) -> bool,
}

impl<T> Variant<T> {
    /// Alternative for a bare scalar
    pub const fn scalar(
        kind: JsonType,
        build: fn(&Value) -> Result<T>,
        claim: fn(&T) -> bool,
    ) -> Self {
        Self {
            kind: AlternativeKind::Scalar(kind),
            build,
            claim,
        }
    }

    /// Alternative for an expanded record object
    pub const fn record(
        schema: &'static RecordSchema,
        build: fn(&Value) -> Result<T>,
        claim: fn(&T) -> bool,
    ) -> Self {
        Self {
            kind: AlternativeKind::Record(schema),
            build,
            claim,
        }
    }

    /// Declared shape
    pub fn kind(&self) -> &AlternativeKind {
        &self.kind
    }
}

impl<T> Alternative<T> for Variant<T> {
    fn label(&self) -> &str {
        self.kind.label()
    }

    fn attempt(&self, raw: &Value) -> Result<T> {
        self.kind.check(raw)?;
        (self.build)(raw)
    }

    fn claims(&self, value: &T) -> bool {
        (self.claim)(value)
    }
}

/// A typed field whose wire value is one of a fixed, ordered set of shapes
pub trait UnionField: Sized + 'static {
    /// Wire name of the field, used in errors
    const FIELD: &'static str;

    /// Declared alternatives, in match order
    fn alternatives() -> &'static [Variant<Self>];
}
