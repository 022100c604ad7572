//! seo_audit library: page-fetch-and-analyze pipeline.
//!
//! Fetches a web page following HTTP redirects manually (recording every
//! hop), parses the served markup once, and derives a structured SEO report:
//! metadata, headings, links, images, structured data, keyword usage,
//! search intent, content sections, and remediation suggestions.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     keyword: Some("seo audit".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! Each invocation is stateless: no entity outlives a single audit and no
//! state is shared across invocations. This library requires a Tokio
//! runtime.

#![warn(missing_docs)]

pub mod analyze;
pub mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod heuristics;
pub mod keyword;
pub mod report;
pub mod suggest;

// Re-export public API
pub use config::{Config, LogLevel};
pub use error_handling::{AuditError, FetchError};
pub use report::Report;
pub use run::run_audit;

mod run {
    use log::{debug, info};

    use crate::analyze::{derive_facts, PageDocument};
    use crate::app::validate_and_normalize_url;
    use crate::config::{Config, MAX_REDIRECT_HOPS};
    use crate::error_handling::AuditError;
    use crate::fetch::{build_client, discover_robots, fetch_with_redirects, RobotsFacts};
    use crate::heuristics::{classify_intent, extract_sections};
    use crate::keyword::compute_keyword_metrics;
    use crate::report::Report;
    use crate::suggest::generate_suggestions;

    /// Runs one audit: fetch, parse once, derive everything, assemble.
    ///
    /// The work is strictly sequential; the only awaited operations are the
    /// page fetch and the best-effort robots.txt/sitemap probes. Dropping
    /// the returned future cancels the in-flight request.
    ///
    /// # Errors
    ///
    /// [`AuditError::InvalidUrl`] when the input URL fails validation,
    /// [`AuditError::Client`] when the HTTP client cannot be built, and
    /// [`AuditError::Fetch`] for any fetch failure (network, non-2xx
    /// terminal status, redirect loop). Analysis itself never fails on
    /// malformed markup.
    pub async fn run_audit(config: Config) -> Result<Report, AuditError> {
        let target_url = validate_and_normalize_url(&config.url)
            .ok_or_else(|| AuditError::InvalidUrl(config.url.clone()))?;

        let client = build_client(&config.user_agent)?;

        info!("Auditing {target_url}");
        let fetch = fetch_with_redirects(&client, &target_url, MAX_REDIRECT_HOPS).await?;
        info!(
            "Fetched {} ({} hop(s), status {})",
            fetch.final_url,
            fetch.redirect_chain.len(),
            fetch.status_code
        );

        let robots_txt = if config.no_robots {
            RobotsFacts::placeholder()
        } else {
            discover_robots(&client, &fetch.final_url).await
        };

        let document = PageDocument::parse(&fetch.html);
        let facts = derive_facts(&document, Some(&fetch.final_url));
        debug!(
            "Analyzed {}: {} words, {} links, {} images",
            fetch.final_url, facts.word_count, facts.links.total, facts.images.total_images
        );

        let keyword = config
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        let metrics =
            keyword.map(|k| compute_keyword_metrics(&facts.plain_text, facts.word_count, k));
        let intent = keyword.map(classify_intent);

        let content_sections = extract_sections(&document);
        let suggestions = generate_suggestions(&facts, metrics.as_ref());

        Ok(Report::assemble(
            target_url,
            fetch,
            facts,
            metrics,
            intent,
            content_sections,
            suggestions,
            robots_txt,
        ))
    }
}
