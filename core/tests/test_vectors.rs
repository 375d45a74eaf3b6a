//! Verify build/parse against the JSON test vectors in `test-vectors/`.
//!
//! Each case describes the expected request, a simulated response and the
//! expected parse result. Comparing parsed values (not raw strings) avoids
//! false negatives from field ordering.

use users_core::{ApiError, HttpMethod, HttpResponse, User, UserClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> UserClient {
    UserClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/list.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn list_test_vectors() {
    let vectors = vectors();
    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_users();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.headers.is_empty(), "{name}: headers");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let users = c.parse_list_users(simulated(case)).unwrap();
        let expected: Vec<User> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(users, expected, "{name}: parsed result");
    }
}

#[test]
fn list_error_vectors() {
    let vectors = vectors();
    let c = client();
    for case in vectors["error_cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let err = c.parse_list_users(simulated(case)).unwrap_err();
        let kind = match err {
            ApiError::NotFound => "NotFound",
            ApiError::HttpError { .. } => "HttpError",
            ApiError::DeserializationError(_) => "DeserializationError",
            ApiError::Transport(_) => "Transport",
        };
        assert_eq!(kind, case["expected_error"].as_str().unwrap(), "{name}: error kind");
    }
}
