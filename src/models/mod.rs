//! Accounting data models
//!
//! Record types, enum tables and the union fields that tie them together.
//!
//! # Overview
//!
//! Every record implements [`Record`], which shape-checks the raw object
//! against the record's field table before decoding and keeps undeclared
//! keys in an explicit `additional_properties` bag. Fields that may arrive
//! either as an identifier or as an expanded object are union types
//! declared in [`fields`].

mod accounting_period;
mod contact;
mod enums;
pub mod fields;
mod journal_entry;
mod purchase_order;
mod record;
mod tracking_category;
mod vendor_credit;

pub use accounting_period::{AccountingPeriod, ACCOUNTING_PERIOD_SCHEMA};
pub use contact::{CompanyInfo, Contact, COMPANY_INFO_SCHEMA, CONTACT_SCHEMA};
pub use enums::{
    AccountingPeriodStatus, CategoryType, ContactStatus, EnumTable, PurchaseOrderStatus,
    TrackingCategoryStatus,
};
pub use fields::{
    AccountingPeriodRef, CounterpartyRef, TrackingCategoryRef, VendorCreditApplyLineRef, VendorRef,
};
pub use journal_entry::{JournalEntry, JOURNAL_ENTRY_SCHEMA};
pub use purchase_order::{PurchaseOrder, PURCHASE_ORDER_SCHEMA};
pub use record::{null_as_default, undeclared_keys, Record};
pub use tracking_category::{TrackingCategory, TRACKING_CATEGORY_SCHEMA};
pub use vendor_credit::{
    VendorCredit, VendorCreditApplyLine, VENDOR_CREDIT_APPLY_LINE_SCHEMA, VENDOR_CREDIT_SCHEMA,
};
