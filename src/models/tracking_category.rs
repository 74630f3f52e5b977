//! Tracking category record

use super::enums::{CategoryType, EnumTable, TrackingCategoryStatus};
use super::record::Record;
use crate::schema::{FieldKind, FieldSpec, JsonType, RecordSchema};
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// A class or department transactions are tagged with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingCategory {
    pub id: Option<String>,
    pub remote_id: Option<String>,
    pub name: Option<String>,
    pub status: Option<TrackingCategoryStatus>,
    pub category_type: Option<CategoryType>,
    /// Identifier of the parent category, if nested
    pub parent_category: Option<String>,
    pub company: Option<String>,
    pub remote_was_deleted: Option<bool>,

    #[serde(skip)]
    pub additional_properties: JsonObject,
}

/// Field table for [`TrackingCategory`]
pub const TRACKING_CATEGORY_SCHEMA: RecordSchema = RecordSchema::new(
    "TrackingCategory",
    &[
        FieldSpec::optional("id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_id", FieldKind::Primitive(JsonType::String)),
        FieldSpec::required("name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("status", TrackingCategoryStatus::FIELD_KIND),
        FieldSpec::optional("category_type", CategoryType::FIELD_KIND),
        FieldSpec::optional("parent_category", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("company", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("remote_was_deleted", FieldKind::Primitive(JsonType::Boolean)),
    ],
);

impl TrackingCategory {
    /// Category with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Record for TrackingCategory {
    const SCHEMA: &'static RecordSchema = &TRACKING_CATEGORY_SCHEMA;

    fn additional_properties(&self) -> &JsonObject {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut JsonObject {
        &mut self.additional_properties
    }
}
