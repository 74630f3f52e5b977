//! Schema tests

use super::*;
use crate::error::Error;
use serde_json::json;
use test_case::test_case;

const STATUS: FieldKind = FieldKind::Enum {
    name: "Status",
    codes: &["ACTIVE", "ARCHIVED"],
};

static WIDGET: RecordSchema = RecordSchema::new(
    "Widget",
    &[
        FieldSpec::required("name", FieldKind::Primitive(JsonType::String)),
        FieldSpec::optional("count", FieldKind::Primitive(JsonType::Integer)),
        FieldSpec::optional("weight", FieldKind::Primitive(JsonType::Number)),
        FieldSpec::optional("status", STATUS),
        FieldSpec::optional("released", FieldKind::Date),
        FieldSpec::optional("modified_at", FieldKind::DateTime),
        FieldSpec::optional("tags", FieldKind::ListOf(&FieldKind::Primitive(JsonType::String))),
    ],
);

#[test_case(json!(null), JsonType::Null ; "null")]
#[test_case(json!(true), JsonType::Boolean ; "boolean")]
#[test_case(json!(7), JsonType::Integer ; "positive integer")]
#[test_case(json!(-7), JsonType::Integer ; "negative integer")]
#[test_case(json!(7.5), JsonType::Number ; "float")]
#[test_case(json!("x"), JsonType::String ; "string")]
#[test_case(json!([1]), JsonType::Array ; "array")]
#[test_case(json!({"a": 1}), JsonType::Object ; "object")]
fn test_json_type_of(value: serde_json::Value, expected: JsonType) {
    assert_eq!(JsonType::of(&value), expected);
}

#[test]
fn test_number_accepts_integer() {
    assert!(JsonType::Number.accepts(JsonType::Integer));
    assert!(!JsonType::Integer.accepts(JsonType::Number));
    assert!(!JsonType::String.accepts(JsonType::Null));
}

#[test]
fn test_check_minimal_object() {
    assert!(WIDGET.check(&json!({"name": "bolt"})).is_ok());
}

#[test]
fn test_check_ignores_undeclared_keys() {
    assert!(WIDGET.matches(&json!({"name": "bolt", "colour": 3})));
}

#[test]
fn test_check_not_an_object() {
    let err = WIDGET.check(&json!("bolt")).unwrap_err();
    assert!(matches!(err, Error::NotAnObject { ref found, .. } if found == "string"));
}

#[test]
fn test_check_missing_required() {
    let err = WIDGET.check(&json!({"count": 1})).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field, .. } if field == "name"));
}

#[test]
fn test_check_required_null_is_type_mismatch() {
    let err = WIDGET.check(&json!({"name": null})).unwrap_err();
    assert!(matches!(
        err,
        Error::FieldTypeMismatch { ref expected, ref found, .. }
            if expected == "string" && found == "null"
    ));
}

#[test]
fn test_check_optional_null_allowed() {
    assert!(WIDGET.matches(&json!({"name": "bolt", "count": null, "status": null})));
}

#[test_case(json!({"name": "bolt", "count": "one"}) ; "string for integer")]
#[test_case(json!({"name": "bolt", "count": 1.5}) ; "float for integer")]
#[test_case(json!({"name": "bolt", "weight": "heavy"}) ; "string for number")]
#[test_case(json!({"name": "bolt", "released": "yesterday"}) ; "bad date")]
#[test_case(json!({"name": "bolt", "modified_at": "2024-01-01"}) ; "date for date-time")]
#[test_case(json!({"name": "bolt", "tags": ["a", 2]}) ; "mixed list")]
#[test_case(json!({"name": "bolt", "tags": "a"}) ; "scalar for list")]
fn test_check_rejects(value: serde_json::Value) {
    assert!(!WIDGET.matches(&value));
}

#[test]
fn test_check_accepts_full_object() {
    let value = json!({
        "name": "bolt",
        "count": 3,
        "weight": 2,
        "status": "ACTIVE",
        "released": "2024-02-29",
        "modified_at": "2024-03-01T12:00:00Z",
        "tags": ["steel", "m6"]
    });
    assert!(WIDGET.check(&value).is_ok());
}

#[test]
fn test_check_unknown_enum_code() {
    let err = WIDGET
        .check(&json!({"name": "bolt", "status": "GONE"}))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownEnumValue { ref enum_name, ref value } if enum_name == "Status" && value == "GONE"
    ));
}

#[test]
fn test_check_list_reports_index() {
    let err = WIDGET
        .check(&json!({"name": "bolt", "tags": ["a", 2]}))
        .unwrap_err();
    assert!(matches!(err, Error::FieldTypeMismatch { ref field, .. } if field == "tags[1]"));
}

#[test]
fn test_nested_delegates_to_validator() {
    fn only_strings(value: &serde_json::Value) -> crate::error::Result<()> {
        if value.is_string() {
            Ok(())
        } else {
            Err(Error::no_match("inner", JsonType::of(value).to_string()))
        }
    }

    static OUTER: RecordSchema = RecordSchema::new(
        "Outer",
        &[FieldSpec::required(
            "inner",
            FieldKind::Nested {
                name: "Inner",
                check: only_strings,
            },
        )],
    );

    assert!(OUTER.matches(&json!({"inner": "abc"})));
    let err = OUTER.check(&json!({"inner": 1})).unwrap_err();
    assert!(matches!(err, Error::NoMatchingAlternative { .. }));
}

#[test]
fn test_required_fields_order() {
    let names: Vec<_> = WIDGET.required_fields().map(|f| f.name).collect();
    assert_eq!(names, vec!["name"]);
    assert!(WIDGET.has_field("tags"));
    assert!(!WIDGET.has_field("colour"));
}

#[test]
fn test_export_record_schema() {
    let doc = WIDGET.to_json_schema().to_json();

    assert_eq!(doc["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(doc["type"], "object");
    assert_eq!(doc["title"], "Widget");
    assert_eq!(doc["required"], json!(["name"]));
    assert_eq!(doc["additionalProperties"], true);
    assert_eq!(doc["properties"]["status"]["enum"], json!(["ACTIVE", "ARCHIVED"]));
    assert_eq!(doc["properties"]["released"]["format"], "date");
    assert_eq!(doc["properties"]["modified_at"]["format"], "date-time");
    assert_eq!(doc["properties"]["tags"]["items"]["type"], "string");
}
