//! Property-based tests for query formatting and envelope classification.
//!
//! These tests check the formatter's output shape for arbitrary filter
//! values and the classifier's presence rule for arbitrary bodies.

use std::sync::Arc;

use hotpepper_core::query::format_fields;
use hotpepper_core::{
    is_success, ClientConfig, Credentials, FilterValue, GourmetApi, ResourceClient,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const NAMES: [&str; 6] = ["address", "count", "genre", "keyword", "lunch", "tel"];

/// Generates one field value of any kind, including the dropped ones.
fn arb_value() -> impl Strategy<Value = FilterValue> {
    prop_oneof![
        Just(FilterValue::Absent),
        prop::option::of("[a-z0-9 ]{0,8}").prop_map(|s| FilterValue::text(s.as_deref())),
        prop::option::of(any::<u32>()).prop_map(FilterValue::scalar::<u32>),
        prop::option::of(any::<bool>()).prop_map(FilterValue::flag),
        prop::collection::vec("[A-Z0-9]{1,6}", 0..4).prop_map(|v| FilterValue::list(&v)),
    ]
}

/// Generates arbitrary code lists.
fn arb_codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][0-9]{3}", 0..6)
}

/// Generates a `results` object with or without an `error` member.
fn arb_results(with_error: bool) -> impl Strategy<Value = Value> {
    (any::<u64>(), "[a-z_]{1,10}").prop_map(move |(n, field)| {
        let mut results = json!({
            "api_version": "1.26",
            "results_available": n,
        });
        results[format!("payload_{field}")] = json!([]);
        if with_error {
            results["error"] = json!([{"code": 3000, "message": "x"}]);
        }
        json!({ "results": results })
    })
}

proptest! {
    /// Every emitted value is non-empty and every emitted name is declared.
    #[test]
    fn query_has_no_empty_values(values in prop::collection::vec(arb_value(), NAMES.len())) {
        let fields: Vec<(&'static str, FilterValue)> = NAMES.iter().copied().zip(values).collect();
        let query = format_fields(fields);

        for (name, value) in query.iter() {
            prop_assert!(!value.is_empty(), "{name} was sent empty");
            prop_assert!(NAMES.contains(&name));
        }
    }

    /// Emitted names keep the filter set's declared order.
    #[test]
    fn query_preserves_declared_order(values in prop::collection::vec(arb_value(), NAMES.len())) {
        let fields: Vec<(&'static str, FilterValue)> = NAMES.iter().copied().zip(values).collect();
        let query = format_fields(fields);

        let positions: Vec<usize> = query
            .iter()
            .map(|(name, _)| NAMES.iter().position(|n| *n == name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// A true flag is always "1"; false and unset are never sent.
    #[test]
    fn flags_follow_one_policy(flag in prop::option::of(any::<bool>())) {
        let query = format_fields(vec![("lunch", FilterValue::flag(flag))]);
        match flag {
            Some(true) => prop_assert_eq!(query.get("lunch"), Some("1")),
            _ => prop_assert!(query.is_empty()),
        }
    }

    /// Lists of comma-free codes split back into the same codes.
    #[test]
    fn lists_are_comma_joined(codes in arb_codes()) {
        let query = format_fields(vec![("genre", FilterValue::list(&codes))]);
        match query.get("genre") {
            None => prop_assert!(codes.is_empty()),
            Some(joined) => {
                let split: Vec<&str> = joined.split(',').collect();
                prop_assert_eq!(split, codes.iter().map(String::as_str).collect::<Vec<_>>());
            }
        }
    }

    /// Any gourmet request leads with key and format, and appended codes
    /// accumulate into a single parameter.
    #[test]
    fn gourmet_request_shape(first in arb_codes(), second in arb_codes(), count in prop::option::of(1u32..100)) {
        let config = ClientConfig::new("http://h/hotpepper", Credentials::with_key("K").unwrap());
        let mut client: ResourceClient<GourmetApi, ()> = ResourceClient::new(config, Arc::new(()));
        client.genre(first.clone()).genre(second.clone());
        if let Some(count) = count {
            client.count(count);
        }

        let req = client.build_search().unwrap();
        prop_assert_eq!(&req.query[0], &("key".to_string(), "K".to_string()));
        prop_assert_eq!(&req.query[1], &("format".to_string(), "json".to_string()));
        prop_assert!(req.query.iter().filter(|(k, _)| k == "genre").count() <= 1);

        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(req.query_value("genre").map(str::to_string), (!expected.is_empty()).then(|| expected.join(",")));
        prop_assert_eq!(req.query_value("count").map(str::to_string), count.map(|c| c.to_string()));
    }

    /// Success is decided by the presence of `results.error` alone.
    #[test]
    fn classification_is_presence_of_error(body in arb_results(false), failed in arb_results(true)) {
        prop_assert!(is_success(&body));
        prop_assert!(!is_success(&failed));
    }
}
