//! Verify query formatting and build/parse methods against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected queries, simulated responses,
//! and expected parse outcomes. Comparing decoded JSON (not raw strings)
//! keeps the vectors readable.

use std::sync::Arc;

use hotpepper_core::query::format_fields;
use hotpepper_core::{
    ApiError, ClientConfig, Credentials, FilterValue, GenreApi, GourmetApi, GourmetType,
    HotPepperResponse, HttpResponse, ResourceClient,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000/hotpepper";

fn client<R: hotpepper_core::Resource>() -> ResourceClient<R, ()> {
    let config = ClientConfig::new(BASE_URL, Credentials::with_key("ABC").unwrap());
    ResourceClient::new(config, Arc::new(()))
}

fn simulated(sim: &Value) -> HttpResponse {
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn pairs(expected: &Value) -> Vec<(String, String)> {
    expected
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Query formatting
// ---------------------------------------------------------------------------

fn filter_value(kind: &str, value: &Value) -> FilterValue {
    match kind {
        "text" => FilterValue::text(value.as_str()),
        "number" => FilterValue::scalar(value.as_u64()),
        "flag" => FilterValue::flag(value.as_bool()),
        "list" => {
            let items: Vec<String> = value
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_str().unwrap().to_string())
                .collect();
            FilterValue::list(&items)
        }
        other => panic!("unknown field kind: {other}"),
    }
}

#[test]
fn query_test_vectors() {
    let raw = include_str!("../../test-vectors/query.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let fields = case["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| {
                // Field names are `'static` in real filter sets.
                let field: &'static str = Box::leak(f["name"].as_str().unwrap().to_string().into_boxed_str());
                (field, filter_value(f["kind"].as_str().unwrap(), &f["value"]))
            })
            .collect();

        let query = format_fields(fields);
        assert_eq!(query.into_pairs(), pairs(&case["expected_query"]), "{name}: query");
    }
}

// ---------------------------------------------------------------------------
// Envelope classification and projection
// ---------------------------------------------------------------------------

#[test]
fn envelope_test_vectors() {
    let raw = include_str!("../../test-vectors/envelope.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client::<GenreApi>();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let parsed = c.parse_search(simulated(&case["simulated_response"]));

        match expected["outcome"].as_str().unwrap() {
            "success" => {
                let resp = parsed.unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_eq!(resp.status() as u64, expected["status"].as_u64().unwrap(), "{name}: status");
                let HotPepperResponse::Success { result, meta, .. } = resp else {
                    panic!("{name}: expected success");
                };
                let codes: Vec<&str> = result.iter().map(|g| g.code.as_str()).collect();
                let expected_codes: Vec<&str> = expected["codes"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|v| v.as_str().unwrap())
                    .collect();
                assert_eq!(codes, expected_codes, "{name}: records");
                assert_eq!(
                    meta.results_available,
                    expected["results_available"].as_u64().unwrap(),
                    "{name}: results_available"
                );
            }
            "failure" => {
                let resp = parsed.unwrap_or_else(|e| panic!("{name}: {e}"));
                assert!(!resp.is_success(), "{name}: expected failure");
                assert_eq!(resp.status() as u64, expected["status"].as_u64().unwrap(), "{name}: status");
                assert_eq!(resp.error(), expected["error"].as_str(), "{name}: error");
                assert!(resp.result().is_none(), "{name}: failure carries no records");
            }
            "error" => {
                let err = match parsed {
                    Ok(resp) => panic!("{name}: expected an error, got status {}", resp.status()),
                    Err(err) => err,
                };
                let kind_matches = match expected["kind"].as_str().unwrap() {
                    "invalid_envelope" => matches!(err, ApiError::InvalidEnvelope(_)),
                    "http_error" => matches!(err, ApiError::HttpError { .. }),
                    "deserialization" => matches!(err, ApiError::Deserialization(_)),
                    other => panic!("unknown error kind: {other}"),
                };
                assert!(kind_matches, "{name}: got {err:?}");
            }
            other => panic!("unknown outcome: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Gourmet output types
// ---------------------------------------------------------------------------

fn output_type(value: &Value) -> Option<GourmetType> {
    match value.as_str()? {
        "lite" => Some(GourmetType::Lite),
        "credit_card" => Some(GourmetType::CreditCard),
        "special" => Some(GourmetType::Special),
        "special+credit_card" => Some(GourmetType::SpecialCreditCard),
        other => panic!("unknown output type: {other}"),
    }
}

#[test]
fn gourmet_test_vectors() {
    let raw = include_str!("../../test-vectors/gourmet.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let body = vectors["shops_body"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let mut c = client::<GourmetApi>();
        let keywords: Vec<&str> = case["keyword"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        c.keyword(keywords);
        if let Some(count) = case["count"].as_u64() {
            c.count(count as u32);
        }
        if let Some(t) = output_type(&case["output_type"]) {
            c.output_type(t);
        }

        // Verify build
        let req = c.build_search().unwrap();
        assert_eq!(req.url, format!("{BASE_URL}/gourmet/v1"), "{name}: url");
        assert_eq!(req.query, pairs(&case["expected_query"]), "{name}: query");

        // Verify parse
        let resp = c
            .parse_search(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: body.to_string(),
            })
            .unwrap();
        let expected_type = case["expected_type"].as_str().unwrap();
        let shops = resp.result().unwrap();
        assert_eq!(shops.len(), 2, "{name}: records");
        for shop in shops {
            assert_eq!(shop.shop_type.as_str(), expected_type, "{name}: {} type", shop.id);
        }
        for shop in resp.raw()["results"]["shop"].as_array().unwrap() {
            assert_eq!(shop["type"], expected_type, "{name}: raw type");
        }
        assert!((shops[1].lat - 35.661_234).abs() < 1e-9, "{name}: string latitude");
    }
}
