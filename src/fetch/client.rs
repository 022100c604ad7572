//! HTTP client construction.

use reqwest::redirect;

use crate::config::{FETCH_TIMEOUT, TCP_CONNECT_TIMEOUT};

/// Builds the HTTP client used for the audit.
///
/// Redirect following is disabled at the transport level so the fetcher can
/// record every hop manually. The client carries the overall fetch timeout;
/// on expiry the in-flight request resolves to a network error rather than
/// hanging the caller.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(redirect::Policy::none())
        .timeout(FETCH_TIMEOUT)
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .user_agent(user_agent)
        .build()
}
