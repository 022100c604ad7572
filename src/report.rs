//! Report assembly.
//!
//! The [`Report`] is the canonical output contract: a read-only aggregate
//! constructed once per audit and serialized to camelCase JSON. Every field
//! is always present; empty data serializes as empty collections or zeros,
//! never as absent keys. `intent` and `content.keyword` are null when no
//! keyword was supplied.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analyze::{
    AnalysisFacts, DescriptionSource, HeadingStats, HreflangAlternate, ImageFacts, LinkFacts,
};
use crate::fetch::{PageFetch, RedirectHop, RobotsFacts};
use crate::heuristics::{ContentSection, Intent};
use crate::keyword::KeywordMetrics;

/// Page metadata plus the human-readable issue signals derived from it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataReport {
    /// Trimmed `<title>` text.
    pub title: String,
    /// The description value; empty when missing.
    pub description: String,
    /// Which source tag supplied the description.
    pub description_source: DescriptionSource,
    /// `<meta name="robots">` content.
    pub robots: Option<String>,
    /// `<link rel="canonical">` href.
    pub canonical: Option<String>,
    /// Metadata signals (missing description, duplicate H1, ...).
    pub issues: Vec<String>,
    /// Coarse score derived from the issue count: 85 minus 5 per issue.
    pub seo_score: i64,
}

/// Baseline score for a page with no metadata issues.
const SEO_SCORE_BASELINE: i64 = 85;
/// Score deducted per metadata issue.
const SEO_SCORE_PENALTY: i64 = 5;

/// Structured-data summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataReport {
    /// Number of JSON-LD blocks that parsed.
    pub json_ld_count: usize,
    /// Deduplicated `@type` names.
    pub schema_types: Vec<String>,
    /// Whether microdata attributes were seen.
    pub microdata: bool,
}

/// Content-derived numbers: word count, headings, keyword usage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// Visible-text word count.
    pub word_count: usize,
    /// Per-level heading counts plus h1 texts.
    pub headings: HeadingStats,
    /// Keyword metrics; null when no keyword analysis was performed.
    pub keyword: Option<KeywordMetrics>,
}

/// The full assembled SEO report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The normalized URL the audit started from.
    pub target_url: String,
    /// The URL that answered the final 2xx response.
    pub final_url: String,
    /// Status code of the final response.
    pub status_code: u16,
    /// RFC 3339 timestamp of the fetch.
    pub fetched_at: String,
    /// Every HTTP hop observed, in order.
    pub redirect_chain: Vec<RedirectHop>,
    /// Page metadata and issue signals.
    pub metadata: MetadataReport,
    /// All `og:*` properties.
    pub open_graph: BTreeMap<String, String>,
    /// hreflang alternates.
    pub hreflang: Vec<HreflangAlternate>,
    /// JSON-LD/microdata summary.
    pub structured_data: StructuredDataReport,
    /// Word count, headings, keyword usage.
    pub content: ContentReport,
    /// Link counts and detail list.
    pub links: LinkFacts,
    /// Image alt-text counts and detail list.
    pub images: ImageFacts,
    /// Remediation hints, in rule order.
    pub suggestions: Vec<String>,
    /// Search intent of the focus keyword; null when no keyword was given.
    pub intent: Option<Intent>,
    /// Heading-to-content sections in document order.
    pub content_sections: Vec<ContentSection>,
    /// robots.txt directives and sitemap locations (best effort).
    pub robots_txt: RobotsFacts,
}

impl Report {
    /// Assembles the report from the pipeline outputs. The report is never
    /// mutated after assembly.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        target_url: String,
        fetch: PageFetch,
        facts: AnalysisFacts,
        keyword: Option<KeywordMetrics>,
        intent: Option<Intent>,
        content_sections: Vec<ContentSection>,
        suggestions: Vec<String>,
        robots_txt: RobotsFacts,
    ) -> Report {
        Report {
            target_url,
            final_url: fetch.final_url,
            status_code: fetch.status_code,
            fetched_at: chrono::Utc::now().to_rfc3339(),
            redirect_chain: fetch.redirect_chain,
            metadata: MetadataReport {
                title: facts.title,
                description: facts.description,
                description_source: facts.description_source,
                robots: facts.meta_robots,
                canonical: facts.canonical,
                seo_score: SEO_SCORE_BASELINE - SEO_SCORE_PENALTY * facts.issues.len() as i64,
                issues: facts.issues,
            },
            open_graph: facts.open_graph,
            hreflang: facts.hreflang,
            structured_data: StructuredDataReport {
                json_ld_count: facts.json_ld_count,
                schema_types: facts.schema_types,
                microdata: facts.has_microdata,
            },
            content: ContentReport {
                word_count: facts.word_count,
                headings: facts.headings,
                keyword,
            },
            links: facts.links,
            images: facts.images,
            suggestions,
            intent,
            content_sections,
            robots_txt,
        }
    }
}
