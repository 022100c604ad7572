//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the crate,
//! including timeouts, size limits, and analysis policy thresholds.

use std::time::Duration;

/// Maximum number of redirect hops to follow before failing with a
/// redirect-loop error. The original design had no cap, which left an
/// infinite-loop risk for self-redirecting URLs.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Overall request timeout for the page fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// TCP connection timeout.
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum URL length (2048 characters). Matches common browser and server
/// limits (e.g., IE, Apache, Nginx defaults).
pub const MAX_URL_LENGTH: usize = 2048;

/// Detailed link/image lists longer than this are truncated; aggregate
/// counts stay exact and a `truncated` flag is set on the report.
pub const DETAIL_LIST_LIMIT: usize = 50;

/// A keyword appearing more often than this is flagged as stuffing
/// regardless of document length. Tunable policy, not structural.
pub const KEYWORD_STUFFING_MAX_OCCURRENCES: u64 = 30;

/// A keyword-to-total-word ratio above this is flagged as stuffing.
/// Tunable policy, not structural.
pub const KEYWORD_STUFFING_MAX_RATIO: f64 = 0.05;

/// Maximum number of robots.txt characters carried into the report.
pub const MAX_ROBOTS_BODY_CHARS: usize = 16 * 1024;

/// Placeholder recorded when robots.txt cannot be retrieved.
pub const ROBOTS_NOT_FOUND: &str = "robots.txt not found";

/// Well-known sitemap locations probed when robots.txt declares none.
pub const SITEMAP_PROBE_PATHS: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current Chrome build; some sites serve different markup (or
/// block outright) based on the User-Agent. Overridable via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
