use std::collections::BTreeMap;

use sdkgen_runtime::{Method, Route};

pub const CREATE_BOOKING: Route = Route::new(Method::Post, "/customers/{customerId}/bookings");

pub const GET_CUSTOMER: Route = Route::new(Method::Get, "/customers/{customerId}");

pub const HEALTH: Route = Route::new(Method::Get, "/health");

pub const LIST_BOOKINGS: Route = Route::new(Method::Get, "/customers/{customerId}/bookings");

pub const LIST_CUSTOMERS: Route = Route::new(Method::Get, "/customers");

/// Every operation, keyed by its function name.
pub fn endpoints() -> BTreeMap<&'static str, Route> {
    BTreeMap::from([
        ("create_booking", CREATE_BOOKING),
        ("get_customer", GET_CUSTOMER),
        ("health", HEALTH),
        ("list_bookings", LIST_BOOKINGS),
        ("list_customers", LIST_CUSTOMERS),
    ])
}
