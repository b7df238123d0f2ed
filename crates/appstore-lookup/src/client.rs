//! HTTP client for the iTunes `/lookup` endpoint.
//!
//! Wraps `reqwest` with request construction for bundle-id queries and maps
//! each phase of the round trip onto [`LookupError`]: URL construction
//! failures become [`LookupError::InvalidRequest`], transport failures pass
//! through as [`LookupError::Transport`], and body problems surface as
//! [`LookupError::Decode`] or [`LookupError::NotFound`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::task::JoinHandle;

use crate::error::LookupError;
use crate::extract::decode_store_url;
use crate::resolver::{resolve_with_callback, StoreUrlResolver};

const LOOKUP_ENDPOINT: &str = "https://itunes.apple.com/lookup";
const USER_AGENT: &str = "appstore-lookup/0.1";

/// Client for resolving bundle identifiers to storefront URLs.
///
/// Cheap to clone; clones share one connection pool. Use
/// [`LookupClient::new`] for production or [`LookupClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    /// Creates a client for the public lookup endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(LOOKUP_ENDPOINT)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// `base_url` is not validated here; a bad value fails every lookup with
    /// [`LookupError::InvalidRequest`] before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Resolves `bundle_id` to its storefront page URL.
    ///
    /// Issues one GET to the lookup endpoint, takes the first result's
    /// `trackViewUrl`, and strips its query string. No retries are made.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidRequest`] if the request URL cannot be built.
    /// - [`LookupError::Transport`] on network failure or non-2xx HTTP status.
    /// - [`LookupError::Decode`] if the body is not a lookup response.
    /// - [`LookupError::NotFound`] if the response has no usable URL.
    pub async fn resolve_store_url(&self, bundle_id: &str) -> Result<String, LookupError> {
        let url = self.build_url(bundle_id)?;

        let body = match self.request_body(bundle_id, url).await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(bundle_id, %error, "storefront lookup request failed");
                return Err(LookupError::Transport(error));
            }
        };

        match decode_store_url(&body) {
            Ok(store_url) => Ok(store_url),
            Err(LookupError::NotFound) => {
                tracing::debug!(bundle_id, "lookup response had no storefront URL");
                Err(LookupError::NotFound)
            }
            Err(error) => {
                tracing::warn!(bundle_id, %error, "lookup response could not be decoded");
                Err(error)
            }
        }
    }

    /// Runs [`resolve_store_url`](Self::resolve_store_url) on the current
    /// Tokio runtime and calls `on_complete` exactly once with the outcome.
    ///
    /// The lookup itself never panics, so every path reaches `on_complete`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn lookup_with_callback<F>(
        &self,
        bundle_id: impl Into<String>,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<String, LookupError>) + Send + 'static,
    {
        resolve_with_callback(Arc::new(self.clone()), bundle_id, on_complete)
    }

    /// Builds the lookup URL with `bundleId` as its percent-encoded query
    /// parameter.
    fn build_url(&self, bundle_id: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            LookupError::InvalidRequest(format!(
                "invalid lookup endpoint '{}': {e}",
                self.base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LookupError::InvalidRequest(format!(
                "unsupported scheme '{}' in lookup endpoint",
                url.scheme()
            )));
        }
        url.query_pairs_mut().append_pair("bundleId", bundle_id);
        Ok(url)
    }

    /// Sends the GET, asserts a 2xx status, and reads the whole body.
    async fn request_body(&self, bundle_id: &str, url: Url) -> Result<Vec<u8>, reqwest::Error> {
        tracing::debug!(bundle_id, %url, "requesting storefront lookup");
        let response = self.client.get(url).send().await?;
        tracing::debug!(bundle_id, status = %response.status(), "lookup response received");
        let body = response.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl StoreUrlResolver for LookupClient {
    async fn resolve_store_url(&self, bundle_id: &str) -> Result<String, LookupError> {
        LookupClient::resolve_store_url(self, bundle_id).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
