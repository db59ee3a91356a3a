//! Files emitted for a Rust SDK module.

mod mod_rs;
mod operations;
mod routes;

pub use mod_rs::ModRs;
pub use operations::{OperationItem, OperationsRs};
pub use routes::{RouteItem, RoutesRs};
