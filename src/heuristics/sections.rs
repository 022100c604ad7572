//! Heading-to-content section extraction.
//!
//! For every heading in document order, captures the heading plus the text
//! of all sibling nodes up to (but not including) the next heading of any
//! level. Works off the already-parsed document; the markup is never
//! re-parsed.

use scraper::ElementRef;
use serde::Serialize;

use crate::analyze::{collapse_whitespace, heading_selector, is_heading_tag, PageDocument};

/// A heading plus the content block immediately following it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// The heading element name (h1..h6).
    pub heading_tag: String,
    /// Trimmed heading text.
    pub heading_text: String,
    /// Whitespace-collapsed text of the siblings between this heading and
    /// the next one. Empty for a trailing heading with no following content.
    pub content: String,
}

/// Extracts sections in document order. Duplicate heading texts are
/// preserved.
pub fn extract_sections(document: &PageDocument) -> Vec<ContentSection> {
    document
        .dom()
        .select(heading_selector())
        .map(|heading| ContentSection {
            heading_tag: heading.value().name().to_string(),
            heading_text: collapse_whitespace(&heading.text().collect::<String>()),
            content: following_content(heading),
        })
        .collect()
}

/// Concatenates the text of sibling nodes after `heading`, stopping at the
/// next sibling heading of any level.
fn following_content(heading: ElementRef<'_>) -> String {
    let mut content = String::new();
    for sibling in heading.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            if is_heading_tag(element.value().name()) {
                break;
            }
            content.push_str(&element.text().collect::<String>());
            content.push(' ');
        } else if let Some(text) = sibling.value().as_text() {
            content.push_str(text);
            content.push(' ');
        }
    }
    collapse_whitespace(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_content_under_headings() {
        let html = r#"
            <body>
                <h1>Introduction</h1>
                <p>This is the intro.</p>
                <h2>Features</h2>
                <p>Feature details here.</p>
                <p>More details.</p>
            </body>
        "#;
        let document = PageDocument::parse(html);
        let sections = extract_sections(&document);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading_tag, "h1");
        assert_eq!(sections[0].heading_text, "Introduction");
        assert_eq!(sections[0].content, "This is the intro.");
        assert_eq!(sections[1].heading_tag, "h2");
        assert_eq!(sections[1].content, "Feature details here. More details.");
    }

    #[test]
    fn trailing_heading_has_empty_content() {
        let html = "<body><h2>Dangling</h2></body>";
        let document = PageDocument::parse(html);
        let sections = extract_sections(&document);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "");
    }

    #[test]
    fn content_stops_at_next_heading_of_any_level() {
        let html = r#"
            <body>
                <h3>Deep</h3>
                <p>Belongs to deep.</p>
                <h1>Top</h1>
                <p>Belongs to top.</p>
            </body>
        "#;
        let document = PageDocument::parse(html);
        let sections = extract_sections(&document);
        assert_eq!(sections[0].content, "Belongs to deep.");
        assert_eq!(sections[1].content, "Belongs to top.");
    }

    #[test]
    fn duplicate_heading_texts_are_preserved() {
        let html = "<body><h2>Same</h2><p>a</p><h2>Same</h2><p>b</p></body>";
        let document = PageDocument::parse(html);
        let sections = extract_sections(&document);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading_text, sections[1].heading_text);
    }

    #[test]
    fn bare_text_siblings_are_captured() {
        let html = "<body><h1>Heading</h1>loose text<p>wrapped</p></body>";
        let document = PageDocument::parse(html);
        let sections = extract_sections(&document);
        assert_eq!(sections[0].content, "loose text wrapped");
    }
}
