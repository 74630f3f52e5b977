//! Union fields of the accounting models
//!
//! Each declaration is the ordered alternative table for one field: the
//! bare identifier first, then the expanded records in match order.

use super::accounting_period::AccountingPeriod;
use super::contact::{CompanyInfo, Contact};
use super::tracking_category::TrackingCategory;
use super::vendor_credit::VendorCreditApplyLine;
use crate::error::Result;
use crate::schema::FieldKind;
use crate::union::{self, UnionField};
use crate::union_field;
use serde_json::Value;

union_field! {
    /// Accounting period a transaction is booked into
    pub enum AccountingPeriodRef("accounting_period") {
        Id(String),
        AccountingPeriod(AccountingPeriod),
    }
}

union_field! {
    /// Tracking category applied to a transaction or line
    pub enum TrackingCategoryRef("tracking_category") {
        Id(String),
        TrackingCategory(TrackingCategory),
    }
}

union_field! {
    /// Invoice a vendor credit was applied to
    pub enum VendorCreditApplyLineRef("applied_to_line") {
        Id(String),
        VendorCreditApplyLine(VendorCreditApplyLine),
    }
}

union_field! {
    /// Supplier of a purchase order or vendor credit
    pub enum VendorRef("vendor") {
        Id(String),
        Contact(Contact),
    }
}

union_field! {
    /// Other party of a transaction
    ///
    /// An object with just a `name` satisfies both records; `Contact` is
    /// declared first and wins.
    pub enum CounterpartyRef("counterparty") {
        Id(String),
        Contact(Contact),
        Company(CompanyInfo),
    }
}

/// Shape check that decodes the raw value as union `T`
pub fn check_union<T: UnionField>(raw: &Value) -> Result<()> {
    union::decode::<T>(raw).map(|_| ())
}

pub(crate) const ACCOUNTING_PERIOD_FIELD: FieldKind = FieldKind::Nested {
    name: "AccountingPeriodRef",
    check: check_union::<AccountingPeriodRef>,
};

pub(crate) const TRACKING_CATEGORY_FIELD: FieldKind = FieldKind::Nested {
    name: "TrackingCategoryRef",
    check: check_union::<TrackingCategoryRef>,
};

pub(crate) const TRACKING_CATEGORIES_FIELD: FieldKind =
    FieldKind::ListOf(&TRACKING_CATEGORY_FIELD);

pub(crate) const APPLIED_TO_LINES_FIELD: FieldKind = FieldKind::ListOf(&FieldKind::Nested {
    name: "VendorCreditApplyLineRef",
    check: check_union::<VendorCreditApplyLineRef>,
});

pub(crate) const VENDOR_FIELD: FieldKind = FieldKind::Nested {
    name: "VendorRef",
    check: check_union::<VendorRef>,
};

pub(crate) const COUNTERPARTY_FIELD: FieldKind = FieldKind::Nested {
    name: "CounterpartyRef",
    check: check_union::<CounterpartyRef>,
};
