//! Error type definitions.

use thiserror::Error;

/// Errors from the redirect-following fetcher.
///
/// Fetch failures are always returned as values; nothing escapes the fetcher
/// boundary as a panic. Per-block JSON-LD parse failures are recovered inside
/// the analyzer and never surface here.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not complete (DNS, timeout, connection reset).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL being requested when the failure occurred.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The final response status was outside 2xx.
    #[error("request for {url} failed with status {status}")]
    HttpStatus {
        /// The URL that produced the terminal response.
        url: String,
        /// The terminal HTTP status code.
        status: u16,
    },

    /// The redirect hop limit was exceeded.
    #[error("redirect limit of {max_hops} hops exceeded starting from {url}")]
    RedirectLoop {
        /// The URL the chain started from.
        url: String,
        /// The configured hop limit.
        max_hops: usize,
    },

    /// A redirect response carried a Location header that could not be
    /// resolved against the current URL.
    #[error("unresolvable redirect Location {location:?} from {url}")]
    InvalidLocation {
        /// The URL that issued the redirect.
        url: String,
        /// The raw Location header value.
        location: String,
    },
}

/// Top-level audit failures, as seen by the binary.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The input URL failed validation (missing host, bad scheme, too long).
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The page fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
