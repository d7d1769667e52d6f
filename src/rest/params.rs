//! Query parameter cleaning and encoding.
//!
//! Request structs serialize every field, absent ones as `null`. Before a
//! request is sent the resulting map is cleaned so that absent values are
//! dropped instead of being transmitted as empty strings.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoinCapError;

/// Remove every entry whose value is absent.
///
/// `null`, empty strings and empty arrays count as absent. All other entries,
/// including `0` and `false`, are kept unchanged.
pub fn clean_params(params: Map<String, Value>) -> Map<String, Value> {
    params
        .into_iter()
        .filter(|(_, value)| !is_absent(value))
        .collect()
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Flatten a cleaned map into `(key, value)` query pairs.
///
/// Arrays are sent as a single comma-separated value.
pub fn to_query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(key, value)| (key.clone(), query_value(value)))
        .collect()
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(query_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Serialize a request struct, clean it, and flatten it into query pairs.
pub(crate) fn encode_params<Q>(params: &Q) -> Result<Vec<(String, String)>, CoinCapError>
where
    Q: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(params).map_err(|e| CoinCapError::InvalidRequest(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(to_query_pairs(&clean_params(map))),
        other => Err(CoinCapError::InvalidRequest(format!(
            "query parameters must serialize to a map, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_clean_params_drops_absent_values() {
        let params = as_map(json!({
            "search": null,
            "ids": [],
            "exchange": "",
            "limit": 10,
            "offset": 0,
            "baseId": "bitcoin"
        }));

        let cleaned = clean_params(params);
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned["limit"], 10);
        assert_eq!(cleaned["offset"], 0);
        assert_eq!(cleaned["baseId"], "bitcoin");
        assert!(!cleaned.contains_key("search"));
        assert!(!cleaned.contains_key("ids"));
        assert!(!cleaned.contains_key("exchange"));
    }

    #[test]
    fn test_clean_params_keeps_present_values_unchanged() {
        let params = as_map(json!({
            "ids": ["bitcoin", "ethereum"],
            "flag": false,
            "start": 1_700_000_000_000_i64
        }));

        let cleaned = clean_params(params.clone());
        assert_eq!(cleaned, params);
    }

    #[test]
    fn test_to_query_pairs_joins_arrays() {
        let params = as_map(json!({ "ids": ["bitcoin", "ethereum"], "limit": 5 }));
        let pairs = to_query_pairs(&params);
        assert!(pairs.contains(&("ids".to_string(), "bitcoin,ethereum".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "5".to_string())));
    }

    #[test]
    fn test_encode_params_unit_is_empty() {
        assert!(encode_params(&()).unwrap().is_empty());
    }

    #[test]
    fn test_encode_params_rejects_scalars() {
        let err = encode_params(&42).unwrap_err();
        assert!(matches!(err, CoinCapError::InvalidRequest(_)));
    }
}
