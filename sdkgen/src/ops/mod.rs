//! Core operations.
//!
//! This module contains the business logic for sdkgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod endpoints;
pub mod generate;

pub use check::check;
pub use endpoints::endpoints;
pub use generate::generate;
