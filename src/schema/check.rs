//! Shape checks
//!
//! Evaluates a raw JSON value against a record's field table. A passing
//! check means the value is shaped like the record; it does not decode it.

use super::types::{FieldKind, JsonType, RecordSchema};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

impl RecordSchema {
    /// Check a raw value against this schema
    ///
    /// The value must be an object. Required fields must be present and
    /// non-null with an accepted kind; optional fields are checked only when
    /// present and non-null. Undeclared keys are ignored.
    pub fn check(&self, value: &Value) -> Result<()> {
        let Value::Object(map) = value else {
            return Err(Error::NotAnObject {
                record: self.name.to_string(),
                found: JsonType::of(value).to_string(),
            });
        };

        for spec in self.fields {
            match map.get(spec.name) {
                None if spec.required => {
                    return Err(Error::missing_field(self.name, spec.name));
                }
                None => {}
                Some(Value::Null) if !spec.required => {}
                Some(field_value) => spec.kind.check(self.name, spec.name, field_value)?,
            }
        }

        Ok(())
    }

    /// Check if a raw value satisfies this schema
    pub fn matches(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }
}

impl FieldKind {
    /// Check one field value against this kind
    pub fn check(&self, record: &str, field: &str, value: &Value) -> Result<()> {
        let mismatch = || {
            Error::field_type(record, field, self.to_string(), JsonType::of(value).to_string())
        };

        match self {
            FieldKind::Primitive(expected) => {
                if expected.matches(value) {
                    Ok(())
                } else {
                    Err(mismatch())
                }
            }
            FieldKind::Date => match value.as_str() {
                Some(s) if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() => Ok(()),
                Some(s) => Err(Error::field_type(record, field, "date", format!("'{s}'"))),
                None => Err(mismatch()),
            },
            FieldKind::DateTime => match value.as_str() {
                Some(s) if DateTime::parse_from_rfc3339(s).is_ok() => Ok(()),
                Some(s) => Err(Error::field_type(record, field, "date-time", format!("'{s}'"))),
                None => Err(mismatch()),
            },
            FieldKind::Enum { name, codes } => match value.as_str() {
                Some(code) if codes.contains(&code) => Ok(()),
                Some(code) => Err(Error::unknown_enum(*name, code)),
                None => Err(mismatch()),
            },
            FieldKind::Nested { check, .. } => check(value),
            FieldKind::ListOf(inner) => {
                let Value::Array(items) = value else {
                    return Err(mismatch());
                };
                for (i, item) in items.iter().enumerate() {
                    inner.check(record, &format!("{field}[{i}]"), item)?;
                }
                Ok(())
            }
        }
    }
}
