//! Purchase order record

use super::enums::{EnumTable, PurchaseOrderStatus};
use super::fields::{
    AccountingPeriodRef, CounterpartyRef, TrackingCategoryRef, VendorRef, ACCOUNTING_PERIOD_FIELD,
    COUNTERPARTY_FIELD, TRACKING_CATEGORIES_FIELD, VENDOR_FIELD,
};
use super::record::{null_as_default, Record};
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Order placed with a supplier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrder {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub status: Option<PurchaseOrderStatus>,
    pub issue_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<NaiveDate>,
    pub vendor: Option<VendorRef>,
    /// Party the goods are delivered to, when not the ordering company
    pub customer: Option<CounterpartyRef>,
    pub memo: Option<String>,
    pub total_amount: Option<f64>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_categories: Vec<TrackingCategoryRef>,
    pub accounting_period: Option<AccountingPeriodRef>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`PurchaseOrder`]
pub const PURCHASE_ORDER_SCHEMA: RecordSchema = RecordSchema::new(
    "PurchaseOrder",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("status", PurchaseOrderStatus::FIELD_KIND),
        FieldSpec::optional("issue_date", FieldKind::DateTime),
        FieldSpec::optional("delivery_date", FieldKind::Date),
        FieldSpec::optional("vendor", VENDOR_FIELD),
        FieldSpec::optional("customer", COUNTERPARTY_FIELD),
        FieldSpec::optional("memo", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("total_amount", FieldKind::Primitive(JsonType::Number)),
        FieldSpec::optional("currency", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("tracking_categories", TRACKING_CATEGORIES_FIELD),
        FieldSpec::optional("accounting_period", ACCOUNTING_PERIOD_FIELD),
    ],
);

impl Record for PurchaseOrder {
    const SCHEMA: &'static RecordSchema = &PURCHASE_ORDER_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
