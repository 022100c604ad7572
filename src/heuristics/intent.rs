//! Search-intent classification.
//!
//! An ordered rule chain over case-folded text; the first satisfied rule
//! wins and rules are never combined or scored.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

fn intent_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!("Failed to compile intent pattern '{pattern}': {e}. This is a programming error.")
    })
}

static TRANSACTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| intent_regex(r"buy|purchase|order|discount|coupon|deal"));
static INFORMATIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| intent_regex(r"how to|what is|guide|tutorial|tips|learn"));
static NAVIGATIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| intent_regex(r"login|sign in|homepage|official site"));
static COMMERCIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| intent_regex(r"best|compare|review|top|vs|alternative"));

/// Coarse search-intent label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Purchase-oriented queries (buy, order, discount...).
    Transactional,
    /// Knowledge-seeking queries (how to, guide, tutorial...).
    Informational,
    /// Destination-seeking queries (login, official site...).
    Navigational,
    /// Comparison/research queries (best, review, vs...).
    #[serde(rename = "Commercial Investigation")]
    CommercialInvestigation,
    /// None of the rules matched.
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Intent::Transactional => "Transactional",
            Intent::Informational => "Informational",
            Intent::Navigational => "Navigational",
            Intent::CommercialInvestigation => "Commercial Investigation",
            Intent::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Classifies text (typically the focus keyword) into a search intent.
pub fn classify_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if TRANSACTIONAL_RE.is_match(&lower) {
        Intent::Transactional
    } else if INFORMATIONAL_RE.is_match(&lower) {
        Intent::Informational
    } else if NAVIGATIONAL_RE.is_match(&lower) {
        Intent::Navigational
    } else if COMMERCIAL_RE.is_match(&lower) {
        Intent::CommercialInvestigation
    } else {
        Intent::Unknown
    }
}
