//! Redirect-following page fetcher.
//!
//! Follows HTTP redirects manually so the full path from initial URL to
//! final destination is recorded, one hop per observed response.

use log::{debug, warn};
use reqwest::Url;
use serde::Serialize;

use crate::error_handling::FetchError;

/// One observed HTTP response in a redirect chain.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedirectHop {
    /// The URL that was requested.
    pub url: String,
    /// The status code the server answered with.
    pub status_code: u16,
}

/// A successfully fetched page.
///
/// The redirect chain is never empty and its last hop is the final,
/// non-redirect response.
#[derive(Debug, Clone)]
pub struct PageFetch {
    /// The response body, read fully as text.
    pub html: String,
    /// The URL that produced the final 2xx response.
    pub final_url: String,
    /// Every hop observed, in order, including the final response.
    pub redirect_chain: Vec<RedirectHop>,
    /// Status code of the final response.
    pub status_code: u16,
}

/// Fetches `start_url`, following redirects manually up to `max_hops`.
///
/// Each response is appended to the chain as a [`RedirectHop`]. A 3xx
/// response with a `Location` header continues the loop, with relative
/// locations resolved against the current URL. A 3xx response without a
/// `Location` header is treated as the terminal response.
///
/// # Errors
///
/// - [`FetchError::Network`] for DNS/connect/timeout/body failures
/// - [`FetchError::HttpStatus`] when the terminal status is outside 2xx
/// - [`FetchError::RedirectLoop`] when `max_hops` is exceeded
/// - [`FetchError::InvalidLocation`] when a Location header cannot be resolved
pub async fn fetch_with_redirects(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
) -> Result<PageFetch, FetchError> {
    let mut chain: Vec<RedirectHop> = Vec::new();
    let mut current = start_url.to_string();

    // max_hops bounds the number of redirects, so up to max_hops + 1
    // responses are observed in total.
    for _ in 0..=max_hops {
        debug!("Requesting {current}");
        let response = client
            .get(&current)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: current.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        chain.push(RedirectHop {
            url: current.clone(),
            status_code: status,
        });

        if (300..400).contains(&status) {
            if let Some(location) = response.headers().get(reqwest::header::LOCATION) {
                let location = location.to_str().unwrap_or("").to_string();
                current = resolve_location(&current, &location).ok_or_else(|| {
                    FetchError::InvalidLocation {
                        url: current.clone(),
                        location: location.clone(),
                    }
                })?;
                debug!("Redirect ({status}) -> {current}");
                continue;
            }
            // Redirect status but no Location header: terminal response.
            warn!("Redirect status {status} for {current} but no Location header");
        }

        if !(200..300).contains(&status) {
            return Err(FetchError::HttpStatus {
                url: current,
                status,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                url: current.clone(),
                source,
            })?;

        debug!(
            "Fetched {current}: status {status}, {} bytes, {} hop(s)",
            html.len(),
            chain.len()
        );
        return Ok(PageFetch {
            html,
            final_url: current,
            redirect_chain: chain,
            status_code: status,
        });
    }

    Err(FetchError::RedirectLoop {
        url: start_url.to_string(),
        max_hops,
    })
}

/// Resolves a Location header value against the current URL.
///
/// Absolute locations are taken as-is; relative ones (including
/// path-relative forms) are joined onto the current URL.
pub(crate) fn resolve_location(current: &str, location: &str) -> Option<String> {
    Url::parse(location)
        .or_else(|_| Url::parse(current).and_then(|base| base.join(location)))
        .map(|u| u.to_string())
        .ok()
}
