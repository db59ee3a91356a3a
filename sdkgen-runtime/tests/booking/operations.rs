use std::sync::{Arc, LazyLock};

use sdkgen_runtime::{
    CallConfig, Client, OperationOptions, Params, ResponseEnvelope, TokenProvider, Transport, Value,
};

use super::routes;

static DEFAULT_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

/// The client used when a call does not set `CallConfig::client`.
pub fn default_client() -> &'static Client {
    &DEFAULT_CLIENT
}

pub fn set_base_url(url: impl Into<String>) {
    DEFAULT_CLIENT.set_base_url(url);
}

/// Tokens are requested once per call of an authenticated operation.
pub fn set_token_provider(provider: impl TokenProvider + 'static) {
    DEFAULT_CLIENT.set_token_provider(provider);
}

pub fn set_transport(transport: Arc<dyn Transport>) {
    DEFAULT_CLIENT.set_transport(transport);
}

/// Book an appointment
///
/// `POST /customers/{customerId}/bookings`
///
/// Path: `customerId`
///
/// Sends `body` as JSON.
pub async fn create_booking(
    path: Option<&Params>,
    query: Option<&Params>,
    body: Option<&Value>,
    config: Option<&CallConfig>,
) -> ResponseEnvelope {
    let options = OperationOptions {
        has_body: true,
        auth_required: true,
    };
    DEFAULT_CLIENT
        .call(&routes::CREATE_BOOKING, options, path, query, body, config)
        .await
}

/// `GET /customers/{customerId}`
///
/// Path: `customerId`
pub async fn get_customer(
    path: Option<&Params>,
    query: Option<&Params>,
    body: Option<&Value>,
    config: Option<&CallConfig>,
) -> ResponseEnvelope {
    let options = OperationOptions {
        has_body: false,
        auth_required: true,
    };
    DEFAULT_CLIENT
        .call(&routes::GET_CUSTOMER, options, path, query, body, config)
        .await
}

/// `GET /health`
pub async fn health(
    path: Option<&Params>,
    query: Option<&Params>,
    body: Option<&Value>,
    config: Option<&CallConfig>,
) -> ResponseEnvelope {
    let options = OperationOptions {
        has_body: false,
        auth_required: false,
    };
    DEFAULT_CLIENT
        .call(&routes::HEALTH, options, path, query, body, config)
        .await
}

/// `GET /customers/{customerId}/bookings`
///
/// Path: `customerId`
///
/// Query: `from`, `to`
pub async fn list_bookings(
    path: Option<&Params>,
    query: Option<&Params>,
    body: Option<&Value>,
    config: Option<&CallConfig>,
) -> ResponseEnvelope {
    let options = OperationOptions {
        has_body: false,
        auth_required: true,
    };
    DEFAULT_CLIENT
        .call(&routes::LIST_BOOKINGS, options, path, query, body, config)
        .await
}

/// `GET /customers`
///
/// Query: `page`
pub async fn list_customers(
    path: Option<&Params>,
    query: Option<&Params>,
    body: Option<&Value>,
    config: Option<&CallConfig>,
) -> ResponseEnvelope {
    let options = OperationOptions {
        has_body: false,
        auth_required: true,
    };
    DEFAULT_CLIENT
        .call(&routes::LIST_CUSTOMERS, options, path, query, body, config)
        .await
}
