//! The parsed page view.
//!
//! [`PageDocument`] is built once per fetch from the served markup; every
//! downstream derivation (facts, keyword metrics, sections) reads from it
//! and never re-parses. Parsing tolerates malformed or partial markup:
//! absent elements yield empty or default values, never errors.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use super::structured::{extract_json_ld, extract_schema_types, has_microdata};

const TEXT_SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template"];
const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

fn static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector_str}': {e}. Using fallback.");
        // A known-valid selector that matches nothing.
        Selector::parse("*:not(*)").expect("fallback selector '*:not(*)' always parses")
    })
}

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("title"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("meta[name='description']"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("meta[property='og:description']"));
static TWITTER_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("meta[name='twitter:description']"));
static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("meta[name='robots']"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("link[rel='canonical']"));
static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("meta[property^='og:']"));
static HREFLANG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("link[rel='alternate'][hreflang]"));
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("a[href]"));
static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("img"));
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| static_selector("h1, h2, h3, h4, h5, h6"));

/// Which source tag supplied the meta description value.
///
/// Provenance is preserved, not collapsed: a description satisfied only via
/// `og:description` drives a distinct report issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionSource {
    /// `<meta name="description">`
    Meta,
    /// `<meta property="og:description">`
    OpenGraph,
    /// `<meta name="twitter:description">`
    Twitter,
    /// No description tag of any kind.
    Missing,
}

/// A `<link rel="alternate" hreflang=...>` entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HreflangAlternate {
    /// The declared language/region code.
    pub lang: String,
    /// The alternate URL.
    pub href: String,
}

/// Per-level heading counts; h1 additionally exposes the full text list for
/// duplicate-H1 and keyword-in-H1 checks.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStats {
    /// Number of `<h1>` elements.
    pub h1: usize,
    /// Number of `<h2>` elements.
    pub h2: usize,
    /// Number of `<h3>` elements.
    pub h3: usize,
    /// Number of `<h4>` elements.
    pub h4: usize,
    /// Number of `<h5>` elements.
    pub h5: usize,
    /// Number of `<h6>` elements.
    pub h6: usize,
    /// Trimmed text of every `<h1>`, in document order.
    pub h1_texts: Vec<String>,
}

/// An anchor element as it appears in the markup, before classification.
#[derive(Debug, Clone)]
pub struct RawAnchor {
    /// The raw href attribute.
    pub href: String,
    /// Collapsed visible text.
    pub text: String,
    /// The rel attribute, if present.
    pub rel: Option<String>,
}

/// One `<img>` element.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// The src attribute, falling back to data-src for lazy-loaded images.
    pub src: String,
    /// The alt attribute; empty when absent (an empty alt counts as missing).
    pub alt: String,
}

/// An immutable parsed view of the fetched HTML.
///
/// Built once per fetch. The inner DOM is retained so the section extractor
/// can walk sibling structure without a second parse.
pub struct PageDocument {
    html: Html,
    /// Trimmed `<title>` text, empty when absent.
    pub title: String,
    /// The description value, trimmed; empty when no source tag matched.
    pub description: String,
    /// Which tag supplied the description.
    pub description_source: DescriptionSource,
    /// `<meta name="robots">` content.
    pub meta_robots: Option<String>,
    /// `<link rel="canonical">` href.
    pub canonical: Option<String>,
    /// All `og:*` properties. Ordered map so serialization is deterministic.
    pub open_graph: BTreeMap<String, String>,
    /// hreflang alternates in document order.
    pub hreflang: Vec<HreflangAlternate>,
    /// Parsed JSON-LD blocks (per-block parse failures are skipped).
    pub json_ld: Vec<serde_json::Value>,
    /// Deduplicated `@type` names across all JSON-LD blocks.
    pub schema_types: Vec<String>,
    /// Whether any element carries itemscope/itemtype/itemprop.
    pub has_microdata: bool,
    /// Per-level heading counts plus h1 texts.
    pub headings: HeadingStats,
    /// Every anchor with an href, unclassified.
    pub anchors: Vec<RawAnchor>,
    /// Every image element.
    pub images: Vec<ImageRecord>,
    /// Visible text of the page (script/style subtrees excluded),
    /// whitespace-collapsed.
    pub plain_text: String,
    /// Whitespace-delimited word count of `plain_text`.
    pub word_count: usize,
}

impl PageDocument {
    /// Parses markup into the queryable page view.
    pub fn parse(html: &str) -> PageDocument {
        let document = Html::parse_document(html);

        let title = first_text(&document, &TITLE_SELECTOR);
        let (description, description_source) = extract_description(&document);
        let meta_robots = first_attr(&document, &META_ROBOTS_SELECTOR, "content");
        let canonical = first_attr(&document, &CANONICAL_SELECTOR, "href");
        let open_graph = extract_open_graph(&document);
        let hreflang = extract_hreflang(&document);
        let json_ld = extract_json_ld(&document);
        let schema_types = extract_schema_types(&json_ld);
        let has_microdata = has_microdata(&document);
        let headings = extract_headings(&document);
        let anchors = extract_anchors(&document);
        let images = extract_images(&document);
        let plain_text = extract_plain_text(&document);
        let word_count = plain_text.split_whitespace().count();

        PageDocument {
            html: document,
            title,
            description,
            description_source,
            meta_robots,
            canonical,
            open_graph,
            hreflang,
            json_ld,
            schema_types,
            has_microdata,
            headings,
            anchors,
            images,
            plain_text,
            word_count,
        }
    }

    /// The underlying DOM, for traversals that need sibling structure.
    pub(crate) fn dom(&self) -> &Html {
        &self.html
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn is_heading_tag(name: &str) -> bool {
    HEADING_TAGS.contains(&name)
}

pub(crate) fn heading_selector() -> &'static Selector {
    &HEADING_SELECTOR
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .unwrap_or_default()
}

fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
}

/// Extraction order: standard meta tag, then og:description, then
/// twitter:description. The winning source is recorded.
fn extract_description(document: &Html) -> (String, DescriptionSource) {
    let candidates: [(&Selector, DescriptionSource); 3] = [
        (&META_DESCRIPTION_SELECTOR, DescriptionSource::Meta),
        (&OG_DESCRIPTION_SELECTOR, DescriptionSource::OpenGraph),
        (&TWITTER_DESCRIPTION_SELECTOR, DescriptionSource::Twitter),
    ];
    for (selector, source) in candidates {
        if let Some(element) = document.select(selector).next() {
            let content = element
                .value()
                .attr("content")
                .map(|c| c.trim().to_string())
                .unwrap_or_default();
            return (content, source);
        }
    }
    (String::new(), DescriptionSource::Missing)
}

fn extract_open_graph(document: &Html) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        if let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) {
            tags.insert(property.to_string(), content.trim().to_string());
        }
    }
    tags
}

fn extract_hreflang(document: &Html) -> Vec<HreflangAlternate> {
    document
        .select(&HREFLANG_SELECTOR)
        .filter_map(|element| {
            let lang = element.value().attr("hreflang")?;
            let href = element.value().attr("href")?;
            Some(HreflangAlternate {
                lang: lang.trim().to_string(),
                href: href.trim().to_string(),
            })
        })
        .collect()
}

fn extract_headings(document: &Html) -> HeadingStats {
    let mut stats = HeadingStats::default();
    for element in document.select(&HEADING_SELECTOR) {
        match element.value().name() {
            "h1" => {
                stats.h1 += 1;
                stats
                    .h1_texts
                    .push(collapse_whitespace(&element.text().collect::<String>()));
            }
            "h2" => stats.h2 += 1,
            "h3" => stats.h3 += 1,
            "h4" => stats.h4 += 1,
            "h5" => stats.h5 += 1,
            "h6" => stats.h6 += 1,
            _ => {}
        }
    }
    stats
}

fn extract_anchors(document: &Html) -> Vec<RawAnchor> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?.trim().to_string();
            Some(RawAnchor {
                href,
                text: collapse_whitespace(&element.text().collect::<String>()),
                rel: element.value().attr("rel").map(|r| r.to_string()),
            })
        })
        .collect()
}

fn extract_images(document: &Html) -> Vec<ImageRecord> {
    document
        .select(&IMG_SELECTOR)
        .map(|element| {
            let src = element
                .value()
                .attr("src")
                .or_else(|| element.value().attr("data-src"))
                .unwrap_or("")
                .trim()
                .to_string();
            let alt = element
                .value()
                .attr("alt")
                .unwrap_or("")
                .trim()
                .to_string();
            ImageRecord { src, alt }
        })
        .collect()
}

/// Collects visible text, skipping script/style/noscript/template subtrees.
fn extract_plain_text(document: &Html) -> String {
    let mut out = String::new();
    collect_text(document.root_element(), &mut out);
    collapse_whitespace(&out)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if TEXT_SKIP_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        }
    }
}
