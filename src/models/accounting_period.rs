//! Accounting period record

use super::enums::{AccountingPeriodStatus, EnumTable};
use super::record::Record;
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A span of time books are closed over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingPeriod {
    pub id: Option<String>,
    /// Identifier in the third-party accounting system
    pub remote_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<AccountingPeriodStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`AccountingPeriod`]
pub const ACCOUNTING_PERIOD_SCHEMA: RecordSchema = RecordSchema::new(
    "AccountingPeriod",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("status", AccountingPeriodStatus::FIELD_KIND),
        FieldSpec::required("start_date", FieldKind::Primitive(JsonType::String)),
        FieldSpec::required("end_date", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("created_at", FieldKind::DateTime),
        FieldSpec::optional("modified_at", FieldKind::DateTime),
    ],
);

impl AccountingPeriod {
    /// Period covering the given dates
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
            ..Default::default()
        }
    }
}

impl Record for AccountingPeriod {
    const SCHEMA: &'static RecordSchema = &ACCOUNTING_PERIOD_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
