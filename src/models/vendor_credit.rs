//! Vendor credit records

use super::fields::{
    AccountingPeriodRef, TrackingCategoryRef, VendorCreditApplyLineRef, VendorRef,
    ACCOUNTING_PERIOD_FIELD, APPLIED_TO_LINES_FIELD, TRACKING_CATEGORIES_FIELD, VENDOR_FIELD,
};
use super::record::{null_as_default, Record};
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portion of a vendor credit applied to one invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorCreditApplyLine {
    pub remote_id: Option<String>,
    /// Identifier of the invoice the credit was applied to
    pub invoice: Option<String>,
    pub applied_date: Option<DateTime<Utc>>,
    /// Decimal amount, as sent by the API
    pub applied_amount: Option<String>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`VendorCreditApplyLine`]
pub const VENDOR_CREDIT_APPLY_LINE_SCHEMA: RecordSchema = RecordSchema::new(
    "VendorCreditApplyLine",
    &[
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::required("invoice", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("applied_date", FieldKind::DateTime),
        FieldSpec::required("applied_amount", FieldKind::Primitive(JsonType::String)),
    ],
);

impl VendorCreditApplyLine {
    /// Application of `amount` to `invoice`
    pub fn new(invoice: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            invoice: Some(invoice.into()),
            applied_amount: Some(amount.into()),
            ..Default::default()
        }
    }
}

impl Record for VendorCreditApplyLine {
    const SCHEMA: &'static RecordSchema = &VENDOR_CREDIT_APPLY_LINE_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}

/// Credit issued by a vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorCredit {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub number: Option<String>,
    pub transaction_date: Option<DateTime<Utc>>,
    pub vendor: Option<VendorRef>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    pub company: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub applied_to_lines: Vec<VendorCreditApplyLineRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_categories: Vec<TrackingCategoryRef>,
    pub accounting_period: Option<AccountingPeriodRef>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`VendorCredit`]
pub const VENDOR_CREDIT_SCHEMA: RecordSchema = RecordSchema::new(
    "VendorCredit",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("number", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("transaction_date", FieldKind::DateTime),
        FieldSpec::optional("vendor", VENDOR_FIELD),
        FieldSpec::optional("total_amount", FieldKind::Primitive(JsonType::Number)),
        FieldSpec::optional("currency", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("company", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("applied_to_lines", APPLIED_TO_LINES_FIELD),
        FieldSpec::optional("tracking_categories", TRACKING_CATEGORIES_FIELD),
        FieldSpec::optional("accounting_period", ACCOUNTING_PERIOD_FIELD),
    ],
);

impl VendorCredit {
    /// Sum of the amounts applied so far, skipping unexpanded or unparsable lines
    pub fn applied_total(&self) -> f64 {
        self.applied_to_lines
            .iter()
            .filter_map(|line| match line {
                VendorCreditApplyLineRef::VendorCreditApplyLine(applied) => {
                    applied.applied_amount.as_deref()?.parse::<f64>().ok()
                }
                VendorCreditApplyLineRef::Id(_) => None,
            })
            .sum()
    }
}

impl Record for VendorCredit {
    const SCHEMA: &'static RecordSchema = &VENDOR_CREDIT_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
