//! iTunes lookup API response types.
//!
//! Only the fields needed to resolve a storefront URL are modelled. Every
//! other field the API returns (`trackName`, `minimumOsVersion`, ...) is
//! ignored by serde, so upstream additions never break decoding.

use serde::Deserialize;

/// Top-level body of a `/lookup` response: `{ "results": [ ... ] }`.
///
/// `results` may be absent or `null`; both decode to `None` and are handled
/// by the extractor as "no match" rather than as a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub results: Option<Vec<LookupResult>>,
}

/// A single catalog entry from the `results` array.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Public storefront page link, usually with a tracking query string
    /// such as `?uo=4`.
    #[serde(default)]
    pub track_view_url: Option<String>,
}
