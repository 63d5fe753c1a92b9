//! Fetch error types.

/// Errors from proxied STAC resource fetches.
///
/// There is no retry or local recovery anywhere in this crate; error policy
/// belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP transport error, propagated unmodified from the client.
    #[error("HTTP error fetching {uri}: {source}")]
    Http {
        /// The (already proxied) URI that was requested.
        uri: String,
        source: reqwest::Error,
    },
    /// The server returned a non-2xx status.
    ///
    /// Only produced by [`crate::StacClient::fetch_json`]; the raw
    /// [`crate::StacClient::fetch_uri`] never inspects status codes.
    #[error("{uri} returned {status} {status_text}")]
    Status {
        /// The (already proxied) URI that was requested.
        uri: String,
        status: u16,
        /// Canonical reason phrase for the status, e.g. `Not Found`.
        status_text: String,
    },
    /// Response body could not be deserialized as JSON.
    #[error("failed to deserialize response from {uri}: {source}")]
    Deserialization {
        /// The (already proxied) URI that was requested.
        uri: String,
        source: reqwest::Error,
    },
}

/// Reason phrase for a status code, falling back to the numeric code for
/// statuses without a canonical one.
pub fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
