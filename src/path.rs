//! Value paths
//!
//! Pulls one field value out of a larger API response before it is decoded.
//! Dot paths (`$.results[0].accounting_period`) are resolved directly;
//! wildcard expressions go through jsonpath-rust.

use crate::error::{Error, Result};
use serde_json::Value;

/// Extract the value at `path`
///
/// Wildcard paths may select several values; those come back as an array.
pub fn extract(value: &Value, path: &str) -> Result<Value> {
    if path.contains('*') && !path.contains("[-") {
        return match extract_with_jsonpath(value, path)? {
            Value::Null => Err(Error::PathNotFound {
                path: path.to_string(),
            }),
            Value::Array(found) if found.is_empty() => Err(Error::PathNotFound {
                path: path.to_string(),
            }),
            found => Ok(found),
        };
    }

    extract_simple_path(value, path)
        .cloned()
        .ok_or_else(|| Error::PathNotFound {
            path: path.to_string(),
        })
}

/// Extract a value using simple dot-notation path
fn extract_simple_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        // Handle array indexing like "results[0]" or "lines[-1]"
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index = index_str.parse::<i64>().ok()?;
            let Value::Array(arr) = current else {
                return None;
            };
            #[allow(clippy::cast_possible_wrap)]
            let idx = if index < 0 {
                arr.len() as i64 + index
            } else {
                index
            };
            current = arr.get(usize::try_from(idx).ok()?)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current)
}

/// Extract values using jsonpath-rust
fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Value> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath: {e}")))?;

    Ok(jp.find(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn response() -> Value {
        json!({
            "next": null,
            "results": [
                {"id": "je_1", "accounting_period": "ap_1"},
                {"id": "je_2", "accounting_period": {"start_date": "2024-01-01", "end_date": "2024-01-31"}}
            ]
        })
    }

    #[test_case("$.results[0].accounting_period", json!("ap_1") ; "dollar prefix")]
    #[test_case("results[0].accounting_period", json!("ap_1") ; "bare path")]
    #[test_case("results[-1].accounting_period.end_date", json!("2024-01-31") ; "negative index")]
    #[test_case("$", response() ; "root")]
    fn test_extract_simple(path: &str, expected: Value) {
        assert_eq!(extract(&response(), path).unwrap(), expected);
    }

    #[test_case("results[5]" ; "index out of range")]
    #[test_case("results[-3]" ; "negative out of range")]
    #[test_case("results.accounting_period" ; "field on array")]
    #[test_case("missing" ; "missing key")]
    #[test_case("results[x]" ; "bad index")]
    fn test_extract_not_found(path: &str) {
        assert!(matches!(
            extract(&response(), path).unwrap_err(),
            Error::PathNotFound { .. }
        ));
    }

    #[test]
    fn test_extract_explicit_null() {
        assert_eq!(extract(&response(), "next").unwrap(), Value::Null);
    }

    #[test]
    fn test_extract_wildcard() {
        let found = extract(&response(), "$.results[*].id").unwrap();
        assert_eq!(found, json!(["je_1", "je_2"]));
    }
}
