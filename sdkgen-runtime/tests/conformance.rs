//! Request-building and envelope behavior, checked through MockTransport.

use std::sync::Arc;

use sdkgen_runtime::{
    CallConfig, Client, HttpResponse, Method, MockTransport, OperationOptions, Params, Route,
    StaticToken, TransportError, json,
};

const LIST_PHONE_NUMBERS: Route = Route::new(Method::Get, "/phones");
const GET_DOGS_APPOINTMENTS: Route = Route::new(Method::Get, "/dogs/{id}/appointments");
const CREATE_BOOKING: Route = Route::new(Method::Post, "/customers/{customerId}/bookings");

const AUTH: OperationOptions = OperationOptions {
    has_body: false,
    auth_required: true,
};
const AUTH_BODY: OperationOptions = OperationOptions {
    has_body: true,
    auth_required: true,
};

fn client_with(mock: &Arc<MockTransport>) -> Client {
    let client = Client::with_transport(mock.clone());
    client.set_base_url("https://api.test/");
    client
}

#[tokio::test]
async fn test_query_and_bearer_token() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/phones", 200, json!([{"number": "+15550100"}]));
    let client = client_with(&mock);
    client.set_token_provider(StaticToken::new("t0k3n"));

    let query = Params::new().with("country", "US").with("active", true);
    let envelope = client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, Some(&query), None, None)
        .await;

    assert!(envelope.success);
    assert_eq!(envelope.data, Some(json!([{"number": "+15550100"}])));
    assert_eq!(envelope.error, None);

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "https://api.test/phones?country=US&active=true");
    assert_eq!(request.query_value("country"), Some("US"));
    assert_eq!(request.query_value("active"), Some("true"));
    assert_eq!(request.header("Authorization"), Some("Bearer t0k3n"));
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_path_substitution() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/dogs/abc/appointments", 200, json!([]));
    let client = client_with(&mock);

    let path = Params::new().with("id", "abc");
    let envelope = client
        .call(&GET_DOGS_APPOINTMENTS, AUTH, Some(&path), None, None, None)
        .await;

    assert!(envelope.success);
    assert_eq!(mock.last_request().unwrap().path, "/dogs/abc/appointments");
}

#[tokio::test]
async fn test_base_path_prefixes_request_path() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/v1/dogs/abc/appointments", 200, json!([]));
    let client = client_with(&mock);

    let route = GET_DOGS_APPOINTMENTS.under("/v1");
    let path = Params::new().with("id", "abc");
    let envelope = client
        .call(&route, AUTH, Some(&path), None, None, None)
        .await;

    assert!(envelope.success);
    let request = mock.last_request().unwrap();
    assert_eq!(request.path, "/v1/dogs/abc/appointments");
    assert_eq!(request.url, "https://api.test/v1/dogs/abc/appointments");
    assert_eq!(route.uri, "/dogs/{id}/appointments");
}

#[tokio::test]
async fn test_json_body_and_created_status() {
    let mock = Arc::new(MockTransport::new());
    mock.on(Method::Post, "/customers/c1/bookings", |request| {
        let mut booking = request.body.clone().unwrap_or_default();
        booking["id"] = json!("b1");
        HttpResponse::new(201, booking)
    });
    let client = client_with(&mock);
    client.set_token_provider(|| "secret".to_string());

    let path = Params::new().with("customerId", "c1");
    let body = json!({"date": "2026-02-06", "notes": "trim nails"});
    let envelope = client
        .call(&CREATE_BOOKING, AUTH_BODY, Some(&path), None, Some(&body), None)
        .await;

    assert!(envelope.success);
    assert_eq!(
        envelope.data,
        Some(json!({"date": "2026-02-06", "notes": "trim nails", "id": "b1"}))
    );

    let request = mock.last_request().unwrap();
    assert_eq!(request.body, Some(body));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn test_missing_path_param_skips_transport() {
    let mock = Arc::new(MockTransport::new());
    let client = client_with(&mock);

    let envelope = client
        .call(&CREATE_BOOKING, AUTH_BODY, None, None, Some(&json!({})), None)
        .await;

    assert!(!envelope.success);
    assert_eq!(envelope.data, None);
    assert_eq!(
        envelope.error.as_deref(),
        Some("missing path parameter 'customerId' for /customers/{customerId}/bookings")
    );
    assert_eq!(mock.request_count(), 0);

    let err = client
        .try_call(&CREATE_BOOKING, AUTH_BODY, None, None, None, None)
        .await
        .unwrap_err();
    assert!(err.is_missing_path_param());
}

#[tokio::test]
async fn test_empty_token_sends_no_authorization() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/phones", 200, json!([]));
    let client = client_with(&mock);

    client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;
    assert_eq!(mock.last_request().unwrap().header("Authorization"), None);
}

#[tokio::test]
async fn test_token_only_for_authenticated_operations() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/phones", 200, json!([]));
    let client = client_with(&mock);
    client.set_token_provider(StaticToken::new("t0k3n"));

    client
        .call(&LIST_PHONE_NUMBERS, OperationOptions::default(), None, None, None, None)
        .await;
    assert_eq!(mock.last_request().unwrap().header("Authorization"), None);
}

#[tokio::test]
async fn test_body_dropped_when_operation_takes_none() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/phones", 200, json!([]));
    let client = client_with(&mock);

    client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, Some(&json!({"x": 1})), None)
        .await;
    let request = mock.last_request().unwrap();
    assert_eq!(request.body, None);
    assert_eq!(request.header("Content-Type"), None);
}

#[tokio::test]
async fn test_unmatched_request_is_distinct_failure() {
    let mock = Arc::new(MockTransport::new());
    let client = client_with(&mock);

    let err = client
        .try_call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await
        .unwrap_err();
    assert!(err.is_unmatched());

    let envelope = client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;
    assert_eq!(
        envelope.error.as_deref(),
        Some("no handler registered for GET /phones")
    );
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn test_non_2xx_and_transport_failures() {
    let mock = Arc::new(MockTransport::new());
    mock.reply(Method::Get, "/dogs/gone/appointments", 404, json!({"message": "no such dog"}));
    mock.fail(Method::Get, "/dogs/slow/appointments", TransportError::Timeout);
    let client = client_with(&mock);

    let gone = Params::new().with("id", "gone");
    let envelope = client
        .call(&GET_DOGS_APPOINTMENTS, AUTH, Some(&gone), None, None, None)
        .await;
    assert!(!envelope.success);
    assert_eq!(
        envelope.error.as_deref(),
        Some("HTTP 404: {\"message\":\"no such dog\"}")
    );

    let slow = Params::new().with("id", "slow");
    let envelope = client
        .call(&GET_DOGS_APPOINTMENTS, AUTH, Some(&slow), None, None, None)
        .await;
    assert_eq!(envelope.error.as_deref(), Some("request timed out"));
}

#[tokio::test]
async fn test_call_config_overrides() {
    let default_mock = Arc::new(MockTransport::new());
    let other_mock = Arc::new(MockTransport::new());
    other_mock.reply(Method::Get, "/phones", 200, json!([]));

    let default_client = client_with(&default_mock);
    let other = Client::with_transport(other_mock.clone());
    other.set_base_url("https://other.test");

    let config = CallConfig::new()
        .header("Accept", "text/plain")
        .header("X-Request-Id", "r1")
        .client(other);
    let envelope = default_client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, Some(&config))
        .await;

    assert!(envelope.success);
    assert_eq!(default_mock.request_count(), 0);
    let request = other_mock.last_request().unwrap();
    assert_eq!(request.url, "https://other.test/phones");
    assert_eq!(request.header("Accept"), Some("text/plain"));
    assert_eq!(request.header("X-Request-Id"), Some("r1"));
    assert_eq!(default_client.config().base_url, "https://api.test/");
}

#[tokio::test]
async fn test_in_flight_call_keeps_snapshot() {
    let mock = Arc::new(MockTransport::new());
    let client = client_with(&mock);

    let handle = client.clone();
    mock.on(Method::Get, "/phones", move |_| {
        handle.set_base_url("https://moved.test");
        HttpResponse::new(200, json!([]))
    });

    client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;
    client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;

    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec!["https://api.test/phones", "https://moved.test/phones"]
    );
}

#[tokio::test]
async fn test_empty_body_is_null_data() {
    let mock = Arc::new(MockTransport::new());
    mock.on(Method::Get, "/phones", |_| HttpResponse::from_text(204, ""));
    let client = client_with(&mock);

    let envelope = client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;
    assert!(envelope.success);
    assert_eq!(envelope.data, Some(json!(null)));
}

#[tokio::test]
async fn test_handler_can_register_stubs() {
    let mock = Arc::new(MockTransport::new());
    let weak = Arc::downgrade(&mock);
    mock.on(Method::Get, "/phones", move |_| {
        if let Some(mock) = weak.upgrade() {
            mock.reply(Method::Get, "/dogs/abc/appointments", 200, json!([]));
        }
        HttpResponse::new(200, json!([]))
    });
    let client = client_with(&mock);

    let first = client
        .call(&LIST_PHONE_NUMBERS, AUTH, None, None, None, None)
        .await;
    assert!(first.success);

    let path = Params::new().with("id", "abc");
    let second = client
        .call(&GET_DOGS_APPOINTMENTS, AUTH, Some(&path), None, None, None)
        .await;
    assert!(second.success);
    assert_eq!(mock.request_count(), 2);
}
