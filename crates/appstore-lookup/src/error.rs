use thiserror::Error;

/// Errors returned by a storefront URL lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The outbound request URL could not be constructed.
    #[error("the URL or the request is incorrect: {0}")]
    InvalidRequest(String),

    /// The response held no usable `trackViewUrl`: the result list was
    /// empty, the first result had no URL, or the URL was an empty string.
    #[error("the app was not found")]
    NotFound,

    /// Network, TLS, or HTTP status failure from the underlying client,
    /// passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode as a lookup response.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
