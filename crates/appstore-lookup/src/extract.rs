//! Decoding of lookup response bodies into storefront URLs.

use crate::error::LookupError;
use crate::types::LookupResponse;

/// Returns the part of `url` before the first `?`, or `url` unchanged when
/// it has no query string.
///
/// No validation is applied to the result. A value starting with `?`
/// yields an empty string.
#[must_use]
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(head, _)| head)
}

/// Picks the storefront URL from a decoded response.
///
/// Only the first result is considered. Its `trackViewUrl` has any query
/// string removed.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] if the result list is absent or empty,
/// or if the first result has no `trackViewUrl` or an empty one.
pub fn extract_store_url(response: LookupResponse) -> Result<String, LookupError> {
    let track_view_url = response
        .results
        .and_then(|results| results.into_iter().next())
        .and_then(|first| first.track_view_url)
        .filter(|url| !url.is_empty())
        .ok_or(LookupError::NotFound)?;

    Ok(strip_query(&track_view_url).to_owned())
}

/// Decodes a raw `/lookup` body and extracts the storefront URL from it.
///
/// # Errors
///
/// - [`LookupError::Decode`] if `body` is not JSON of the expected shape.
/// - [`LookupError::NotFound`] if the body holds no usable URL.
pub fn decode_store_url(body: &[u8]) -> Result<String, LookupError> {
    let response: LookupResponse = serde_json::from_slice(body)?;
    extract_store_url(response)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
