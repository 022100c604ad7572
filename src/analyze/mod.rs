//! Document analysis.
//!
//! Parses fetched markup once into a [`PageDocument`] and derives metadata,
//! headings, links, images, and structured-data facts from that single
//! parse. [`AnalysisFacts`] is the single source of truth consumed by the
//! keyword engine, the suggestion generator, and report assembly; no other
//! component re-parses the markup.

mod document;
mod images;
mod links;
mod structured;

pub use document::{
    DescriptionSource, HeadingStats, HreflangAlternate, ImageRecord, PageDocument, RawAnchor,
};
pub use images::{image_alt_stats, ImageFacts};
pub use links::{classify_links, LinkFacts, LinkRecord, RelPolicy};

pub(crate) use document::{collapse_whitespace, heading_selector, is_heading_tag};

use std::collections::BTreeMap;

use log::debug;

/// Everything the analyzer derives from one parsed document.
///
/// Absence vs presence is part of the type: optional tags are `Option`,
/// list-valued facts are empty collections, never missing fields.
#[derive(Debug, Clone)]
pub struct AnalysisFacts {
    /// Trimmed `<title>` text.
    pub title: String,
    /// The description value; empty when missing.
    pub description: String,
    /// Which source tag supplied the description.
    pub description_source: DescriptionSource,
    /// `<meta name="robots">` content.
    pub meta_robots: Option<String>,
    /// `<link rel="canonical">` href.
    pub canonical: Option<String>,
    /// All `og:*` properties.
    pub open_graph: BTreeMap<String, String>,
    /// hreflang alternates in document order.
    pub hreflang: Vec<HreflangAlternate>,
    /// Number of JSON-LD blocks that parsed successfully.
    pub json_ld_count: usize,
    /// Deduplicated JSON-LD `@type` names.
    pub schema_types: Vec<String>,
    /// Whether any microdata attributes are present.
    pub has_microdata: bool,
    /// Per-level heading counts plus h1 texts.
    pub headings: HeadingStats,
    /// Classified link counts and detail list.
    pub links: LinkFacts,
    /// Image alt-text counts and detail list.
    pub images: ImageFacts,
    /// Visible page text, whitespace-collapsed.
    pub plain_text: String,
    /// Word count of the visible text.
    pub word_count: usize,
    /// Human-readable metadata signals (missing description, non-standard
    /// description source, missing or duplicate H1).
    pub issues: Vec<String>,
}

/// Derives [`AnalysisFacts`] from a parsed document.
///
/// Pure with respect to the document: re-running on the same parse yields
/// identical facts. `base_url` supplies the hostname for link internality.
pub fn derive_facts(document: &PageDocument, base_url: Option<&str>) -> AnalysisFacts {
    let links = classify_links(&document.anchors, base_url);
    debug!(
        "Classified {} content links ({} internal, {} external)",
        links.total, links.internal, links.external
    );

    let images = image_alt_stats(&document.images);
    debug!(
        "Image alt stats: {} total, {} missing alt",
        images.total_images, images.missing_alt
    );

    let issues = collect_issues(document);

    AnalysisFacts {
        title: document.title.clone(),
        description: document.description.clone(),
        description_source: document.description_source,
        meta_robots: document.meta_robots.clone(),
        canonical: document.canonical.clone(),
        open_graph: document.open_graph.clone(),
        hreflang: document.hreflang.clone(),
        json_ld_count: document.json_ld.len(),
        schema_types: document.schema_types.clone(),
        has_microdata: document.has_microdata,
        headings: document.headings.clone(),
        links,
        images,
        plain_text: document.plain_text.clone(),
        word_count: document.word_count,
        issues,
    }
}

/// Parses markup and derives facts in one call.
///
/// Callers that also need section extraction should parse once via
/// [`PageDocument::parse`] and share the document instead.
pub fn analyze(html: &str, base_url: Option<&str>) -> AnalysisFacts {
    derive_facts(&PageDocument::parse(html), base_url)
}

fn collect_issues(document: &PageDocument) -> Vec<String> {
    let mut issues = Vec::new();

    match document.description_source {
        DescriptionSource::Meta => {}
        DescriptionSource::Missing => issues.push("Missing meta description".to_string()),
        DescriptionSource::OpenGraph => issues.push(
            "Description found via og:description, not the standard meta tag".to_string(),
        ),
        DescriptionSource::Twitter => issues.push(
            "Description found via twitter:description, not the standard meta tag".to_string(),
        ),
    }

    if document.headings.h1 == 0 {
        issues.push("Missing H1 tag".to_string());
    } else if document.headings.h1 > 1 {
        issues.push("Duplicate H1 tags".to_string());
    }

    issues
}

#[cfg(test)]
mod tests;
