//! Remediation suggestion generation.
//!
//! A pure function over the analysis facts and keyword metrics. Rules fire
//! independently, in a fixed order; a rule that does not trigger emits
//! nothing.

use crate::analyze::AnalysisFacts;
use crate::keyword::KeywordMetrics;

/// Cliché phrases that read as filler copy.
const BUZZWORD_PHRASES: &[&str] = &[
    "cutting-edge technology",
    "unlock the power of",
    "revolutionize your",
    "game-changing",
    "take your business to the next level",
    "best-in-class",
    "seamless experience",
    "one-stop shop",
];

/// Generates remediation hints, all applicable rules included, in rule
/// order: keyword stuffing, buzzword phrases, missing alt text, missing H1,
/// no internal links.
pub fn generate_suggestions(
    facts: &AnalysisFacts,
    metrics: Option<&KeywordMetrics>,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(metrics) = metrics {
        if metrics.stuffing_flag {
            suggestions.push(format!(
                "Keyword \"{}\" appears {} times and looks stuffed; reduce its usage so the copy reads naturally.",
                metrics.keyword, metrics.frequency
            ));
        }
    }

    let lower_text = facts.plain_text.to_lowercase();
    let matched: Vec<&str> = BUZZWORD_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lower_text.contains(phrase))
        .collect();
    if !matched.is_empty() {
        suggestions.push(format!(
            "Replace cliché phrasing with concrete language: {}.",
            matched.join(", ")
        ));
    }

    if facts.images.missing_alt > 0 {
        suggestions.push(format!(
            "{} image(s) are missing alt text; add descriptive alt attributes.",
            facts.images.missing_alt
        ));
    }

    if facts.headings.h1 == 0 {
        suggestions.push("Add an H1 heading; the page has none.".to_string());
    }

    if facts.links.internal == 0 {
        suggestions.push("Add internal links; the page links to no other page on this site.".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{derive_facts, PageDocument};
    use crate::keyword::compute_keyword_metrics;

    fn facts_for(html: &str) -> AnalysisFacts {
        let document = PageDocument::parse(html);
        derive_facts(&document, Some("https://example.com"))
    }

    #[test]
    fn clean_page_yields_no_suggestions() {
        let html = r#"
            <html><body>
                <h1>Title</h1>
                <a href="/about">About</a>
                <img src="a.png" alt="described">
                <p>Plain factual copy.</p>
            </body></html>
        "#;
        let suggestions = generate_suggestions(&facts_for(html), None);
        assert!(suggestions.is_empty(), "got: {suggestions:?}");
    }

    #[test]
    fn stuffed_keyword_is_reported_first() {
        let body = format!("<h1>t</h1><a href='/x'>x</a><p>{}</p>", "seo ".repeat(40));
        let html = format!("<html><body>{body}</body></html>");
        let facts = facts_for(&html);
        let metrics = compute_keyword_metrics(&facts.plain_text, facts.word_count, "seo");
        assert!(metrics.stuffing_flag);
        let suggestions = generate_suggestions(&facts, Some(&metrics));
        assert!(suggestions[0].contains("seo"));
        assert!(suggestions[0].contains(&metrics.frequency.to_string()));
    }

    #[test]
    fn buzzwords_are_listed() {
        let html = r#"
            <html><body><h1>t</h1><a href="/x">x</a>
            <p>Our cutting-edge technology will unlock the power of synergy.</p>
            </body></html>
        "#;
        let suggestions = generate_suggestions(&facts_for(html), None);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("cutting-edge technology"));
        assert!(suggestions[0].contains("unlock the power of"));
    }

    #[test]
    fn missing_alt_missing_h1_and_no_internal_links() {
        let html = r#"
            <html><body>
                <h2>Not an h1</h2>
                <a href="https://other.com/x">external</a>
                <img src="a.png">
                <img src="b.png" alt="">
            </body></html>
        "#;
        let suggestions = generate_suggestions(&facts_for(html), None);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].contains("2 image(s)"));
        assert!(suggestions[1].contains("H1"));
        assert!(suggestions[2].contains("internal links"));
    }
}
