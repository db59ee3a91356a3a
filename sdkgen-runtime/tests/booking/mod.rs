//! Customer Booking client.
//!
//! API version 2.1.0.

mod operations;
pub mod routes;

pub use operations::*;
pub use routes::endpoints;
pub use sdkgen_runtime::{
    CallConfig, Client, Params, ResponseEnvelope, StaticToken, TokenProvider, Transport, Value,
};
