//! Contact and company records
//!
//! Both can stand on the other side of a transaction.

use super::enums::{ContactStatus, EnumTable};
use super::record::Record;
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer or supplier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub name: Option<String>,
    pub is_supplier: Option<bool>,
    pub is_customer: Option<bool>,
    pub email_address: Option<String>,
    pub tax_number: Option<String>,
    pub status: Option<ContactStatus>,
    /// ISO 4217 currency code
    pub currency: Option<String>,
    pub company: Option<String>,
    pub remote_updated_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`Contact`]
pub const CONTACT_SCHEMA: RecordSchema = RecordSchema::new(
    "Contact",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::required("name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("is_supplier", FieldKind::Primitive(JsonType::Boolean)),
        FieldSpec::optional("is_customer", FieldKind::Primitive(JsonType::Boolean)),
        FieldSpec::optional("email_address", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("tax_number", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("status", ContactStatus::FIELD_KIND),
        FieldSpec::optional("currency", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("company", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_updated_at", FieldKind::DateTime),
    ],
);

impl Contact {
    /// Contact with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Record for Contact {
    const SCHEMA: &'static RecordSchema = &CONTACT_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}

/// The company whose books are being read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub tax_number: Option<String>,
    pub fiscal_year_end_month: Option<i64>,
    pub fiscal_year_end_day: Option<i64>,
    pub currency: Option<String>,
    pub remote_created_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`CompanyInfo`]
pub const COMPANY_INFO_SCHEMA: RecordSchema = RecordSchema::new(
    "CompanyInfo",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::required("name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("legal_name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("tax_number", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("fiscal_year_end_month", FieldKind::Primitive(JsonType::Integer)),
        FieldSpec::optional("fiscal_year_end_day", FieldKind::Primitive(JsonType::Integer)),
        FieldSpec::optional("currency", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_created_at", FieldKind::DateTime),
    ],
);

impl CompanyInfo {
    /// Company with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Record for CompanyInfo {
    const SCHEMA: &'static RecordSchema = &COMPANY_INFO_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
