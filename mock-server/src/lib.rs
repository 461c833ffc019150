//! In-process imitation of the HotPepper web service.
//!
//! Serves `/hotpepper/<resource>/v1` with the upstream's envelope shapes.
//! Like the real service it answers HTTP 200 for API-level failures and puts
//! the failure code (1000/2000/3000) inside the body. Every received query
//! string is recorded so tests can check exactly what a client sent.

#![recursion_limit = "256"]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const API_VERSION: &str = "1.26";

pub const SERVER_ERROR: u16 = 1000;
pub const AUTH_ERROR: u16 = 2000;
pub const PARAM_ERROR: u16 = 3000;

type Params = HashMap<String, String>;

/// Shared state: the accepted key plus a log of received query strings.
#[derive(Clone)]
pub struct MockState {
    api_key: Arc<str>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockState {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: Arc::from(api_key),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Raw query strings received so far, oldest first.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

pub fn app(api_key: &str) -> Router {
    app_with_state(MockState::new(api_key))
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/hotpepper/gourmet/v1", get(gourmet))
        .route("/hotpepper/shop/v1", get(shop))
        .route("/hotpepper/{resource}/v1", get(master))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

pub fn success(field: &str, records: Vec<Value>, available: usize, start: usize) -> Value {
    let mut results = json!({
        "api_version": API_VERSION,
        "results_available": available,
        // The upstream sends this one as a string.
        "results_returned": records.len().to_string(),
        "results_start": start,
    });
    results[field] = Value::Array(records);
    json!({ "results": results })
}

pub fn failure(code: u16, message: &str) -> Value {
    json!({
        "results": {
            "api_version": API_VERSION,
            "error": [{ "code": code, "message": message }]
        }
    })
}

/// Log the request and check key and format. `Err` carries the failure
/// envelope to send back.
async fn admit(state: &MockState, resource: &str, raw: Option<String>, params: &Params) -> Result<(), Value> {
    let raw = raw.unwrap_or_default();
    tracing::info!(resource, query = %redact(&raw), "request");
    state.requests.write().await.push(raw);

    if params.get("key").map(String::as_str) != Some(&*state.api_key) {
        return Err(failure(AUTH_ERROR, "APIキーまたはIPアドレスの認証エラーです。"));
    }
    if params.get("format").map(String::as_str) != Some("json") {
        return Err(failure(PARAM_ERROR, "format=json is the only format this server speaks."));
    }
    Ok(())
}

fn redact(raw: &str) -> String {
    raw.split('&')
        .map(|pair| if pair.starts_with("key=") { "key=***" } else { pair })
        .collect::<Vec<_>>()
        .join("&")
}

fn codes(params: &Params, name: &str) -> Vec<String> {
    params
        .get(name)
        .map(|v| v.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

fn number(params: &Params, name: &str) -> Result<Option<usize>, Value> {
    match params.get(name) {
        None => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| failure(PARAM_ERROR, &format!("{name} must be a positive integer."))),
    }
}

fn text_at<'a>(record: &'a Value, pointer: &str) -> &'a str {
    record.pointer(pointer).and_then(Value::as_str).unwrap_or_default()
}

/// Apply `start` (1-based) and `count`, then wrap in a success envelope.
fn page(field: &str, records: Vec<Value>, params: &Params, default_count: Option<usize>) -> Result<Value, Value> {
    let start = number(params, "start")?.unwrap_or(1).max(1);
    let count = number(params, "count")?.or(default_count);
    let available = records.len();
    let taken: Vec<Value> = records
        .into_iter()
        .skip(start - 1)
        .take(count.unwrap_or(usize::MAX))
        .collect();
    Ok(success(field, taken, available, start))
}

/// Per-resource table: payload field, record set, and which query
/// parameters filter on which record code.
fn master_table(resource: &str) -> Option<(Vec<Value>, &'static [(&'static str, &'static str)])> {
    let table: (Vec<Value>, &'static [(&'static str, &'static str)]) = match resource {
        "budget" => (fixtures::budgets(), &[]),
        "credit_card" => (fixtures::credit_cards(), &[]),
        "large_service_area" => (fixtures::large_service_areas(), &[]),
        "service_area" => (fixtures::service_areas(), &[]),
        "genre" => (fixtures::genres(), &[("code", "/code")]),
        "large_area" => (fixtures::large_areas(), &[("large_area", "/code")]),
        "middle_area" => (
            fixtures::middle_areas(),
            &[("middle_area", "/code"), ("large_area", "/large_area/code")],
        ),
        "small_area" => (
            fixtures::small_areas(),
            &[("small_area", "/code"), ("middle_area", "/middle_area/code")],
        ),
        "special_category" => (fixtures::special_categories(), &[("special_category", "/code")]),
        "special" => (
            fixtures::specials(),
            &[("special", "/code"), ("special_category", "/special_category/code")],
        ),
        _ => return None,
    };
    Some(table)
}

async fn master(
    State(state): State<MockState>,
    Path(resource): Path<String>,
    RawQuery(raw): RawQuery,
    Query(params): Query<Params>,
) -> Result<Json<Value>, StatusCode> {
    let (records, filters) = master_table(&resource).ok_or(StatusCode::NOT_FOUND)?;
    if let Err(envelope) = admit(&state, &resource, raw, &params).await {
        return Ok(Json(envelope));
    }

    let keyword = params.get("keyword").cloned().unwrap_or_default();
    let records: Vec<Value> = records
        .into_iter()
        .filter(|record| {
            filters.iter().all(|(param, pointer)| {
                let wanted = codes(&params, param);
                wanted.is_empty() || wanted.iter().any(|c| c == text_at(record, pointer))
            })
        })
        .filter(|record| keyword.is_empty() || text_at(record, "/name").contains(&keyword))
        .collect();

    let envelope = page(&resource, records, &params, None).unwrap_or_else(|e| e);
    Ok(Json(envelope))
}

async fn shop(
    State(state): State<MockState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<Params>,
) -> Json<Value> {
    if let Err(envelope) = admit(&state, "shop", raw, &params).await {
        return Json(envelope);
    }
    let keywords = codes(&params, "keyword");
    let tel = params.get("tel");
    if keywords.is_empty() && tel.is_none() {
        return Json(failure(PARAM_ERROR, "keyword or tel is required."));
    }

    let records: Vec<Value> = fixtures::shops()
        .into_iter()
        .filter(|s| tel.map_or(true, |t| text_at(s, "/tel") == t.as_str()))
        .filter(|s| {
            keywords.iter().all(|k| {
                ["/name", "/name_kana", "/address"]
                    .iter()
                    .any(|p| text_at(s, p).contains(k.as_str()))
            })
        })
        .map(|s| {
            json!({
                "id": s["id"],
                "name": s["name"],
                "name_kana": s["name_kana"],
                "address": s["address"],
                "genre": {"name": s["genre"]["name"]},
                "urls": s["urls"],
                "desc": 1
            })
        })
        .collect();

    Json(page("shop", records, &params, Some(30)).unwrap_or_else(|e| e))
}

/// Radius in metres for `range` 1..=5.
fn range_metres(range: usize) -> Option<f64> {
    match range {
        1 => Some(300.0),
        2 => Some(500.0),
        3 => Some(1000.0),
        4 => Some(2000.0),
        5 => Some(3000.0),
        _ => None,
    }
}

/// Equirectangular distance; fine at city scale.
fn distance_metres(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS: f64 = 6_371_000.0;
    let x = (lng2 - lng1).to_radians() * ((lat1 + lat2) / 2.0).to_radians().cos();
    let y = (lat2 - lat1).to_radians();
    (x * x + y * y).sqrt() * EARTH_RADIUS
}

fn location_filter(params: &Params) -> Result<Option<(f64, f64, f64)>, Value> {
    let (lat, lng) = match (params.get("lat"), params.get("lng")) {
        (Some(lat), Some(lng)) => (lat, lng),
        (None, None) => return Ok(None),
        _ => return Err(failure(PARAM_ERROR, "lat and lng must be given together.")),
    };
    let invalid = || failure(PARAM_ERROR, "lat/lng must be decimal degrees.");
    let lat: f64 = lat.parse().map_err(|_| invalid())?;
    let lng: f64 = lng.parse().map_err(|_| invalid())?;
    let range = number(params, "range")?.unwrap_or(3);
    let radius = range_metres(range).ok_or_else(|| failure(PARAM_ERROR, "range must be 1 to 5."))?;
    Ok(Some((lat, lng, radius)))
}

/// Shape one normal-output shop for the requested `type`.
fn shape_shop(mut shop: Value, output_type: &str) -> Value {
    if let Some(fields) = shop.as_object_mut() {
        fields.remove("tel");
        if output_type == "lite" {
            fields.retain(|k, _| fixtures::LITE_FIELDS.contains(&k.as_str()));
        } else {
            let parts: Vec<&str> = output_type.split('+').collect();
            if !parts.contains(&"special") {
                fields.remove("special");
            }
            if !parts.contains(&"credit_card") {
                fields.remove("credit_card");
            }
        }
    }
    shop
}

fn gourmet_search(params: &Params) -> Result<Value, Value> {
    let output_type = params.get("type").map(String::as_str).unwrap_or("");
    let known = ["", "lite", "credit_card", "special", "special+credit_card", "credit_card+special"];
    if !known.contains(&output_type) {
        return Err(failure(PARAM_ERROR, "type is invalid."));
    }
    let ids = codes(params, "id");
    let keywords: Vec<String> = codes(params, "keyword")
        .iter()
        .flat_map(|k| k.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    let names = codes(params, "name");
    let location = location_filter(params)?;
    let code_filters = [
        ("genre", "/genre/code"),
        ("budget", "/budget/code"),
        ("large_area", "/large_area/code"),
        ("middle_area", "/middle_area/code"),
        ("small_area", "/small_area/code"),
        ("service_area", "/service_area/code"),
    ];
    let lunch = params.get("lunch").map(String::as_str) == Some("1");
    let wifi = params.get("wifi").map(String::as_str) == Some("1");

    let records: Vec<Value> = fixtures::shops()
        .into_iter()
        .filter(|s| ids.is_empty() || ids.iter().any(|id| id == text_at(s, "/id")))
        .filter(|s| {
            keywords.iter().all(|k| {
                ["/name", "/name_kana", "/address", "/genre/name"]
                    .iter()
                    .any(|p| text_at(s, p).contains(k.as_str()))
            })
        })
        .filter(|s| names.is_empty() || names.iter().any(|n| text_at(s, "/name").contains(n.as_str())))
        .filter(|s| {
            code_filters.iter().all(|(param, pointer)| {
                let wanted = codes(params, param);
                wanted.is_empty() || wanted.iter().any(|c| c == text_at(s, pointer))
            })
        })
        .filter(|s| !lunch || text_at(s, "/lunch") == "あり")
        .filter(|s| !wifi || text_at(s, "/wifi") == "あり")
        .filter(|s| {
            location.map_or(true, |(lat, lng, radius)| {
                let slat = s["lat"].as_f64().unwrap_or_default();
                let slng = s["lng"].as_f64().unwrap_or_default();
                distance_metres(lat, lng, slat, slng) <= radius
            })
        })
        .map(|s| shape_shop(s, output_type))
        .collect();

    let count = number(params, "count")?;
    if count.is_some_and(|c| c == 0 || c > 100) {
        return Err(failure(PARAM_ERROR, "count must be between 1 and 100."));
    }
    page("shop", records, params, Some(10))
}

async fn gourmet(
    State(state): State<MockState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<Params>,
) -> Json<Value> {
    if let Err(envelope) = admit(&state, "gourmet", raw, &params).await {
        return Json(envelope);
    }
    if params.get("fail").map(String::as_str) == Some("server") {
        return Json(failure(SERVER_ERROR, "サーバ障害エラーです。"));
    }
    Json(gourmet_search(&params).unwrap_or_else(|e| e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn success_envelope_shape() {
        let env = success("genre", fixtures::genres(), 5, 1);
        assert_eq!(env["results"]["results_returned"], "5");
        assert_eq!(env["results"]["results_available"], 5);
        assert!(env["results"]["genre"].is_array());
        assert!(env["results"].get("error").is_none());
    }

    #[test]
    fn failure_envelope_shape() {
        let env = failure(AUTH_ERROR, "denied");
        assert_eq!(env["results"]["error"][0]["code"], 2000);
        assert_eq!(env["results"]["error"][0]["message"], "denied");
    }

    #[test]
    fn redact_hides_key() {
        assert_eq!(redact("key=abc&format=json"), "key=***&format=json");
    }

    #[test]
    fn lite_keeps_only_lite_fields() {
        let shop = shape_shop(fixtures::shops().remove(0), "lite");
        let keys: Vec<&String> = shop.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), fixtures::LITE_FIELDS.len());
        assert!(shop.get("budget").is_none());
    }

    #[test]
    fn normal_drops_special_and_card_blocks() {
        let shop = shape_shop(fixtures::shops().remove(0), "");
        assert!(shop.get("special").is_none());
        assert!(shop.get("credit_card").is_none());
        assert!(shop.get("budget").is_some());
        let both = shape_shop(fixtures::shops().remove(0), "special+credit_card");
        assert!(both.get("special").is_some());
        assert!(both.get("credit_card").is_some());
    }

    #[test]
    fn gourmet_keyword_and_count() {
        let env = gourmet_search(&params(&[("keyword", "ラーメン"), ("count", "1")])).unwrap();
        assert_eq!(env["results"]["results_available"], 2);
        assert_eq!(env["results"]["results_returned"], "1");
    }

    #[test]
    fn gourmet_location_radius() {
        let near_shibuya = params(&[("lat", "35.658"), ("lng", "139.7016"), ("range", "1")]);
        let env = gourmet_search(&near_shibuya).unwrap();
        assert_eq!(env["results"]["shop"][0]["id"], "J000000001");
        assert_eq!(env["results"]["results_available"], 1);
    }

    #[test]
    fn gourmet_rejects_bad_type() {
        let env = gourmet_search(&params(&[("type", "creditCard")])).unwrap_err();
        assert_eq!(env["results"]["error"][0]["code"], PARAM_ERROR);
    }

    #[test]
    fn distance_is_roughly_right() {
        // Shibuya to Ginza is a little over 5.5 km.
        let d = distance_metres(35.658_034, 139.701_636, 35.671_989, 139.763_965);
        assert!((5_000.0..6_500.0).contains(&d), "{d}");
    }
}
