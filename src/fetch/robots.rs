//! Best-effort robots.txt and sitemap discovery.
//!
//! These auxiliary fetches never escalate failures: anything that goes wrong
//! degrades to documented placeholder values, never an abort of the audit.

use log::debug;
use reqwest::Url;
use serde::Serialize;

use crate::config::{MAX_ROBOTS_BODY_CHARS, ROBOTS_NOT_FOUND, SITEMAP_PROBE_PATHS};

/// Robots directives and sitemap locations for the audited origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsFacts {
    /// The robots.txt body (truncated), or `"robots.txt not found"`.
    pub robots_txt: String,
    /// Sitemap URLs, either declared in robots.txt or found by probing
    /// well-known locations.
    pub sitemaps: Vec<String>,
}

impl RobotsFacts {
    /// The shape used when discovery is skipped or the origin is unusable.
    pub fn placeholder() -> Self {
        RobotsFacts {
            robots_txt: ROBOTS_NOT_FOUND.to_string(),
            sitemaps: Vec::new(),
        }
    }
}

/// Retrieves `{origin}/robots.txt` and collects `Sitemap:` declarations.
///
/// When robots.txt declares no sitemaps, `/sitemap.xml` and
/// `/sitemap_index.xml` are probed and recorded if they answer 2xx.
pub async fn discover_robots(client: &reqwest::Client, page_url: &str) -> RobotsFacts {
    let origin = match Url::parse(page_url) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(_) => return RobotsFacts::placeholder(),
    };

    let robots_url = format!("{origin}/robots.txt");
    let mut sitemaps = Vec::new();

    let robots_txt = match client.get(&robots_url).send().await {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(body) => {
                sitemaps = parse_sitemap_declarations(&body);
                body.chars().take(MAX_ROBOTS_BODY_CHARS).collect()
            }
            Err(e) => {
                debug!("Failed to read robots.txt body from {robots_url}: {e}");
                ROBOTS_NOT_FOUND.to_string()
            }
        },
        Ok(response) => {
            debug!(
                "robots.txt at {robots_url} answered {}",
                response.status().as_u16()
            );
            ROBOTS_NOT_FOUND.to_string()
        }
        Err(e) => {
            debug!("Failed to fetch {robots_url}: {e}");
            ROBOTS_NOT_FOUND.to_string()
        }
    };

    if sitemaps.is_empty() {
        for path in SITEMAP_PROBE_PATHS {
            let probe = format!("{origin}{path}");
            match client.get(&probe).send().await {
                Ok(response) if response.status().is_success() => sitemaps.push(probe),
                Ok(_) | Err(_) => {}
            }
        }
    }

    RobotsFacts {
        robots_txt,
        sitemaps,
    }
}

/// Extracts `Sitemap:` entries from a robots.txt body (case-insensitive).
pub(crate) fn parse_sitemap_declarations(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| {
            let line = line.trim();
            let lower = line.to_ascii_lowercase();
            lower
                .strip_prefix("sitemap:")
                .map(|_| line["sitemap:".len()..].trim().to_string())
        })
        .filter(|entry| !entry.is_empty())
        .collect()
}
