use thiserror::Error;

/// Failure classes surfaced by the client layer.
///
/// Every failure is local to the triggering call; there is no global failure
/// state. The consumer decides whether and how to retry.
#[derive(Debug, Error)]
pub enum Error {
    /// A resource address could not be parsed. The request was never sent.
    #[error("invalid resource uri: {uri}")]
    InvalidUri { uri: String },

    /// No usable credentials: missing, revoked, or a failed refresh
    /// round-trip. Propagated as-is, never retried automatically.
    #[error("authorization failure: {reason}")]
    AuthFailure { reason: String },

    /// The remote API returned an error or the transport failed. Diagnostic
    /// context is logged at the call site; no automatic retry.
    #[error("{method} {endpoint} failed")]
    RequestFailure {
        endpoint: String,
        method: reqwest::Method,
        #[source]
        source: reqwest::Error,
    },

    /// The on-disk credential cache could not be read or written.
    #[error("credential cache: {0}")]
    Cache(String),
}

impl Error {
    pub fn invalid_uri(uri: &str) -> Self {
        Error::InvalidUri { uri: uri.to_string() }
    }

    pub fn auth(reason: impl Into<String>) -> Self {
        Error::AuthFailure { reason: reason.into() }
    }
}
