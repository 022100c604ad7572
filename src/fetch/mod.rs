//! Page fetching.
//!
//! Provides the HTTP client, the manual redirect-following fetcher, and the
//! best-effort robots.txt/sitemap discovery. The fetcher holds no state
//! between invocations; every failure is returned as a value.

mod client;
mod redirects;
mod robots;

pub use client::build_client;
pub use redirects::{fetch_with_redirects, PageFetch, RedirectHop};
pub use robots::{discover_robots, RobotsFacts};
