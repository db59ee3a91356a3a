//! Emitted module files.
//!
//! Every SDK consists of four sibling modules:
//!
//! - `routes` - the operation registry and `Endpoints()`
//! - `requests` - the `Client`, envelope and request building
//! - `sdk` - one exported function per operation
//! - `index` - re-exports

mod index;
mod requests;
mod routes;
mod sdk;

pub use index::IndexFile;
pub use requests::RequestsFile;
pub use routes::{RouteEntry, RoutesFile};
pub use sdk::{SdkFile, SdkOperation};
