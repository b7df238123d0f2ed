//! Resolve a mobile app's bundle identifier to its public storefront URL
//! through the iTunes lookup API.

pub mod client;
pub mod error;
pub mod extract;
pub mod resolver;
pub mod types;

pub use client::LookupClient;
pub use error::LookupError;
pub use extract::{extract_store_url, strip_query};
pub use resolver::{resolve_with_callback, StoreUrlResolver};
pub use types::{LookupResponse, LookupResult};
