//! Registry of the built-in union fields and records
//!
//! Lets tools address the typed models by wire name instead of by Rust type.

use crate::error::{Error, Result};
use crate::models::{
    AccountingPeriod, AccountingPeriodRef, CompanyInfo, Contact, CounterpartyRef, JournalEntry,
    PurchaseOrder, Record, TrackingCategory, TrackingCategoryRef, VendorCredit,
    VendorCreditApplyLine, VendorCreditApplyLineRef, VendorRef,
};
use crate::schema::{JsonSchema, RecordSchema};
use crate::union::{self, UnionField};
use serde::Serialize;
use serde_json::Value;

/// Outcome of decoding one union field
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Label of the selected alternative
    pub alternative: String,
    /// Re-encoded value
    pub value: Value,
}

/// A union field that can be decoded without knowing its Rust type
pub trait FieldDecoder {
    /// Wire name of the field
    fn field(&self) -> &str;

    /// Alternative labels, in match order
    fn alternative_labels(&self) -> Vec<String>;

    /// Decode a raw value
    fn resolve(&self, raw: &Value) -> Result<Resolved>;

    /// JSON Schema of the field
    fn json_schema(&self) -> JsonSchema;
}

/// Typed union field compiled into the crate
pub struct BuiltinField {
    pub field: &'static str,
    pub type_name: &'static str,
    labels: fn() -> Vec<String>,
    resolve: fn(&Value) -> Result<Resolved>,
    schema: fn() -> JsonSchema,
}

impl BuiltinField {
    const fn of<T: UnionField + Serialize>(type_name: &'static str) -> Self {
        Self {
            field: T::FIELD,
            type_name,
            labels: labels_of::<T>,
            resolve: resolve_as::<T>,
            schema: union::union_schema::<T>,
        }
    }
}

impl FieldDecoder for BuiltinField {
    fn field(&self) -> &str {
        self.field
    }

    fn alternative_labels(&self) -> Vec<String> {
        (self.labels)()
    }

    fn resolve(&self, raw: &Value) -> Result<Resolved> {
        (self.resolve)(raw)
    }

    fn json_schema(&self) -> JsonSchema {
        (self.schema)()
    }
}

fn labels_of<T: UnionField>() -> Vec<String> {
    T::alternatives()
        .iter()
        .map(|variant| variant.kind().label().to_string())
        .collect()
}

fn resolve_as<T: UnionField + Serialize>(raw: &Value) -> Result<Resolved> {
    let value: T = union::decode(raw)?;
    let alternative = union::validate(&value)?;
    Ok(Resolved {
        alternative: alternative.to_string(),
        value: serde_json::to_value(&value)?,
    })
}

/// Built-in union fields
pub static BUILTIN_FIELDS: [BuiltinField; 5] = [
    BuiltinField::of::<AccountingPeriodRef>("AccountingPeriodRef"),
    BuiltinField::of::<TrackingCategoryRef>("TrackingCategoryRef"),
    BuiltinField::of::<VendorCreditApplyLineRef>("VendorCreditApplyLineRef"),
    BuiltinField::of::<VendorRef>("VendorRef"),
    BuiltinField::of::<CounterpartyRef>("CounterpartyRef"),
];

/// Look up a built-in union field by wire name
pub fn find_field(field: &str) -> Option<&'static BuiltinField> {
    BUILTIN_FIELDS.iter().find(|f| f.field == field)
}

/// Record type compiled into the crate
pub struct BuiltinRecord {
    /// Snake-case name, e.g. `journal_entry`
    pub name: &'static str,
    pub schema: &'static RecordSchema,
    decode: fn(&Value) -> Result<Value>,
}

impl BuiltinRecord {
    const fn of<R: Record>(name: &'static str) -> Self {
        Self {
            name,
            schema: R::SCHEMA,
            decode: decode_record::<R>,
        }
    }

    /// Decode a raw object and re-encode it, additional properties included
    pub fn decode(&self, raw: &Value) -> Result<Value> {
        (self.decode)(raw)
    }
}

fn decode_record<R: Record>(raw: &Value) -> Result<Value> {
    Ok(R::from_json(raw)?.to_json())
}

/// Built-in record types
pub static BUILTIN_RECORDS: [BuiltinRecord; 8] = [
    BuiltinRecord::of::<AccountingPeriod>("accounting_period"),
    BuiltinRecord::of::<TrackingCategory>("tracking_category"),
    BuiltinRecord::of::<Contact>("contact"),
    BuiltinRecord::of::<CompanyInfo>("company_info"),
    BuiltinRecord::of::<VendorCreditApplyLine>("vendor_credit_apply_line"),
    BuiltinRecord::of::<VendorCredit>("vendor_credit"),
    BuiltinRecord::of::<PurchaseOrder>("purchase_order"),
    BuiltinRecord::of::<JournalEntry>("journal_entry"),
];

/// Look up a built-in record type by name
pub fn find_record(name: &str) -> Result<&'static BuiltinRecord> {
    BUILTIN_RECORDS
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| Error::UnknownRecord {
            record: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_field_names_unique() {
        let mut names: Vec<_> = BUILTIN_FIELDS.iter().map(|f| f.field).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_FIELDS.len());
    }

    #[test]
    fn test_find_field() {
        let field = find_field("accounting_period").unwrap();
        assert_eq!(field.type_name, "AccountingPeriodRef");
        assert_eq!(
            field.alternative_labels(),
            vec!["string".to_string(), "AccountingPeriod".to_string()]
        );
        assert!(find_field("ledger").is_none());
    }

    #[test]
    fn test_resolve_reports_alternative() {
        let field = find_field("counterparty").unwrap();

        let resolved = field.resolve(&json!("cont_1")).unwrap();
        assert_eq!(resolved.alternative, "string");
        assert_eq!(resolved.value, json!("cont_1"));

        let resolved = field.resolve(&json!({"name": "Acme"})).unwrap();
        assert_eq!(resolved.alternative, "Contact");
        assert_eq!(resolved.value["name"], "Acme");
    }

    #[test]
    fn test_resolve_no_match() {
        let field = find_field("vendor").unwrap();
        let err = field.resolve(&json!(42)).unwrap_err();
        assert!(matches!(err, Error::NoMatchingAlternative { ref field, .. } if field == "vendor"));
    }

    #[test]
    fn test_find_record() {
        let record = find_record("journal_entry").unwrap();
        assert_eq!(record.schema.name, "JournalEntry");

        let err = find_record("ledger").err().unwrap();
        assert!(matches!(err, Error::UnknownRecord { .. }));
    }

    #[test]
    fn test_record_decode_keeps_additional_properties() {
        let record = find_record("contact").unwrap();
        let value = record
            .decode(&json!({"name": "Acme", "field_mappings": {"x": 1}}))
            .unwrap();
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["field_mappings"], json!({"x": 1}));
    }
}
