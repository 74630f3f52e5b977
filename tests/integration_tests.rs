//! Integration tests over full API responses
//!
//! Tests the end-to-end flow: list response → path selection → union and
//! record decoding, with and without a runtime catalog.

use ledgerlink_models::path::extract;
use ledgerlink_models::registry::{find_field, find_record};
use ledgerlink_models::union;
use ledgerlink_models::{
    load_catalog, load_catalog_from_str, AccountingPeriodRef, CounterpartyRef, Error,
    FieldDecoder, JournalEntry, PurchaseOrder, Record, TrackingCategoryRef,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Write;

/// Paginated list response as sent by the API
#[derive(Debug, Deserialize)]
struct Page<T> {
    next: Option<String>,
    results: Vec<T>,
}

fn journal_entries_page() -> Value {
    json!({
        "next": "cD0yMDI0LTAxLTMx",
        "previous": null,
        "results": [
            {
                "id": "je_1",
                "transaction_date": "2024-01-15T00:00:00Z",
                "memo": "Accrued rent",
                "accounting_period": "ap_jan",
                "tracking_categories": ["tc_retail"],
                "field_mappings": {"organization_defined_targets": {}}
            },
            {
                "id": "je_2",
                "transaction_date": "2024-01-31T00:00:00Z",
                "memo": "Payroll",
                "accounting_period": {
                    "id": "ap_jan",
                    "name": "January 2024",
                    "status": "ACTIVE",
                    "start_date": "2024-01-01",
                    "end_date": "2024-01-31"
                },
                "tracking_categories": [
                    {"id": "tc_ops", "name": "Operations", "category_type": "DEPARTMENT"},
                    "tc_retail"
                ],
                "remote_was_deleted": false
            }
        ]
    })
}

// ============================================================================
// Typed Decoding
// ============================================================================

#[test]
fn test_decode_list_response() {
    let raw = journal_entries_page();
    let page: Page<Value> = serde_json::from_value(raw).unwrap();
    assert_eq!(page.next.as_deref(), Some("cD0yMDI0LTAxLTMx"));

    let entries: Vec<JournalEntry> = page
        .results
        .iter()
        .map(JournalEntry::from_json)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0].accounting_period,
        Some(AccountingPeriodRef::Id("ap_jan".to_string()))
    );
    assert!(entries[0].additional_properties.contains_key("field_mappings"));

    let Some(AccountingPeriodRef::AccountingPeriod(period)) = &entries[1].accounting_period else {
        panic!("expected an expanded accounting period");
    };
    assert_eq!(period.name.as_deref(), Some("January 2024"));
    assert!(matches!(
        entries[1].tracking_categories[0],
        TrackingCategoryRef::TrackingCategory(_)
    ));
    assert_eq!(entries[1].tracking_categories[1].as_id(), Some("tc_retail"));
}

#[test]
fn test_serde_derive_goes_through_decoder() {
    // Plain serde still routes union fields through first-match decoding
    let page: Page<JournalEntry> = serde_json::from_value(journal_entries_page()).unwrap();
    assert!(page.results[1]
        .accounting_period
        .as_ref()
        .is_some_and(AccountingPeriodRef::is_expanded));
}

#[test]
fn test_one_bad_record_names_field() {
    let mut raw = journal_entries_page();
    raw["results"][1]["accounting_period"] = json!({"start_date": "2024-01-01"});

    let err = JournalEntry::from_json(&raw["results"][1]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No matching alternative for field 'accounting_period': object value matched no declared shape"
    );
    assert!(err.is_decode_failure());
}

#[test]
fn test_purchase_order_round_trip() {
    let raw = json!({
        "id": "po_1",
        "status": "AUTHORIZED",
        "issue_date": "2024-03-01T09:00:00Z",
        "delivery_date": "2024-03-15",
        "vendor": {"id": "c_1", "name": "Paper Supply", "is_supplier": true, "addresses": []},
        "customer": "c_9",
        "total_amount": 1250.75,
        "currency": "EUR",
        "tracking_categories": null,
        "accounting_period": "ap_mar"
    });

    let order = PurchaseOrder::from_json(&raw).unwrap();
    let encoded = order.to_json();

    assert_eq!(encoded["vendor"]["addresses"], json!([]));
    assert_eq!(encoded["tracking_categories"], json!([]));
    assert_eq!(encoded["customer"], "c_9");
    assert_eq!(PurchaseOrder::from_json(&encoded).unwrap(), order);
}

// ============================================================================
// Path Selection
// ============================================================================

#[test]
fn test_extract_then_decode() {
    let raw = journal_entries_page();

    let value = extract(&raw, "$.results[1].accounting_period").unwrap();
    let period: AccountingPeriodRef = union::decode(&value).unwrap();
    assert_eq!(period.alternative().unwrap(), "AccountingPeriod");

    let value = extract(&raw, "$.results[-2].accounting_period").unwrap();
    let period: AccountingPeriodRef = union::decode(&value).unwrap();
    assert_eq!(period.as_id(), Some("ap_jan"));
}

#[test]
fn test_wildcard_selects_every_entry() {
    let raw = journal_entries_page();

    let selected = extract(&raw, "$.results[*].accounting_period").unwrap();
    let periods: Vec<AccountingPeriodRef> = selected
        .as_array()
        .unwrap()
        .iter()
        .map(union::decode)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(periods.len(), 2);
    assert!(!periods[0].is_expanded());
    assert!(periods[1].is_expanded());
}

#[test]
fn test_missing_path() {
    let err = extract(&journal_entries_page(), "$.results[5].memo").unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}

// ============================================================================
// Registry and Catalog
// ============================================================================

#[test]
fn test_registry_by_wire_name() {
    let field = find_field("counterparty").unwrap();
    let resolved = field
        .resolve(&json!({"name": "Northwind", "fiscal_year_end_day": 31, "is_customer": "yes"}))
        .unwrap();
    assert_eq!(resolved.alternative, "CompanyInfo");

    let record = find_record("journal_entry").unwrap();
    let value = record.decode(&journal_entries_page()["results"][0]).unwrap();
    assert_eq!(value["id"], "je_1");
}

#[test]
fn test_counterparty_prefers_contact() {
    let value: CounterpartyRef =
        union::decode(&json!({"name": "Northwind", "legal_name": "Northwind Traders Ltd"}))
            .unwrap();
    assert!(matches!(value, CounterpartyRef::Contact(_)));
}

#[test]
fn test_catalog_file_decodes_like_builtin() {
    let yaml = r"
unions:
  - field: accounting_period
    description: Period reference
    alternatives:
      - scalar: string
      - record:
          name: AccountingPeriod
          fields:
            - { name: start_date, type: string, required: true }
            - { name: end_date, type: string, required: true }
";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    let runtime = catalog.get("accounting_period").unwrap();
    let builtin = find_field("accounting_period").unwrap();

    for raw in [
        json!("ap_1"),
        json!({"start_date": "2024-01-01", "end_date": "2024-01-31"}),
    ] {
        let a = runtime.resolve(&raw).unwrap();
        let b = builtin.resolve(&raw).unwrap();
        assert_eq!(a.alternative, b.alternative);
        assert_eq!(a.value["start_date"], b.value["start_date"]);
    }

    let bad = json!({"unexpected": "object"});
    assert!(runtime.resolve(&bad).is_err());
    assert!(builtin.resolve(&bad).is_err());
}

#[test]
fn test_invalid_catalog_rejected() {
    let err = load_catalog_from_str("unions:\n  - field: empty\n    alternatives: []\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
