//! Journal entry record

use super::fields::{
    AccountingPeriodRef, TrackingCategoryRef, ACCOUNTING_PERIOD_FIELD, TRACKING_CATEGORIES_FIELD,
};
use super::record::{null_as_default, Record};
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Manual ledger posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalEntry {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub transaction_date: Option<DateTime<Utc>>,
    pub memo: Option<String>,
    pub currency: Option<String>,
    pub company: Option<String>,
    pub accounting_period: Option<AccountingPeriodRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_categories: Vec<TrackingCategoryRef>,
    pub remote_was_deleted: Option<bool>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`JournalEntry`]
pub const JOURNAL_ENTRY_SCHEMA: RecordSchema = RecordSchema::new(
    "JournalEntry",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("transaction_date", FieldKind::DateTime),
        FieldSpec::optional("memo", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("currency", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("company", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("accounting_period", ACCOUNTING_PERIOD_FIELD),
        FieldSpec::optional("tracking_categories", TRACKING_CATEGORIES_FIELD),
        FieldSpec::optional("remote_was_deleted", FieldKind::Primitive(JsonType::Boolean)),
    ],
);

impl Record for JournalEntry {
    const SCHEMA: &'static RecordSchema = &JOURNAL_ENTRY_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
