//! Analyzer tests.

use super::*;

const BASE: Option<&str> = Some("https://example.com/page");

fn facts_for(html: &str) -> AnalysisFacts {
    derive_facts(&PageDocument::parse(html), BASE)
}

#[test]
fn title_is_trimmed_and_collapsed() {
    let html = "<html><head><title>\n  Test   Page\n</title></head></html>";
    assert_eq!(facts_for(html).title, "Test Page");
}

#[test]
fn missing_title_yields_empty_string() {
    assert_eq!(facts_for("<html><body></body></html>").title, "");
}

#[test]
fn description_prefers_standard_meta_tag() {
    let html = r#"
        <head>
            <meta name="description" content=" Standard ">
            <meta property="og:description" content="OG">
        </head>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.description, "Standard");
    assert_eq!(facts.description_source, DescriptionSource::Meta);
    assert!(facts.issues.iter().all(|i| !i.contains("escription")));
}

#[test]
fn description_falls_back_to_open_graph() {
    let html = r#"<head><meta property="og:description" content=" From OG "></head>"#;
    let facts = facts_for(html);
    assert_eq!(facts.description, "From OG");
    assert_eq!(facts.description_source, DescriptionSource::OpenGraph);
    assert!(facts
        .issues
        .iter()
        .any(|i| i.contains("og:description")));
}

#[test]
fn description_falls_back_to_twitter() {
    let html = r#"<head><meta name="twitter:description" content="From Twitter"></head>"#;
    let facts = facts_for(html);
    assert_eq!(facts.description, "From Twitter");
    assert_eq!(facts.description_source, DescriptionSource::Twitter);
}

#[test]
fn missing_description_is_an_issue() {
    let facts = facts_for("<html><body><h1>x</h1></body></html>");
    assert_eq!(facts.description_source, DescriptionSource::Missing);
    assert!(facts
        .issues
        .contains(&"Missing meta description".to_string()));
}

#[test]
fn heading_counts_and_h1_texts() {
    let html = r#"
        <body>
            <h1>First</h1><h1>Second</h1>
            <h2>a</h2><h2>b</h2><h3>c</h3><h6>d</h6>
        </body>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.headings.h1, 2);
    assert_eq!(facts.headings.h2, 2);
    assert_eq!(facts.headings.h3, 1);
    assert_eq!(facts.headings.h6, 1);
    assert_eq!(facts.headings.h1_texts, vec!["First", "Second"]);
    assert!(facts.issues.contains(&"Duplicate H1 tags".to_string()));
}

#[test]
fn zero_h1_is_an_issue() {
    let facts = facts_for("<body><h2>only</h2></body>");
    assert_eq!(facts.headings.h1, 0);
    assert!(facts.issues.contains(&"Missing H1 tag".to_string()));
}

#[test]
fn robots_and_canonical() {
    let html = r#"
        <head>
            <meta name="robots" content="noindex, follow">
            <link rel="canonical" href="https://example.com/canonical">
        </head>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.meta_robots.as_deref(), Some("noindex, follow"));
    assert_eq!(
        facts.canonical.as_deref(),
        Some("https://example.com/canonical")
    );
}

#[test]
fn open_graph_and_hreflang() {
    let html = r#"
        <head>
            <meta property="og:title" content="OG Title">
            <meta property="og:type" content="article">
            <link rel="alternate" hreflang="en" href="https://example.com/en">
            <link rel="alternate" hreflang="de" href="https://example.com/de">
        </head>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.open_graph.get("og:title").unwrap(), "OG Title");
    assert_eq!(facts.open_graph.get("og:type").unwrap(), "article");
    assert_eq!(facts.hreflang.len(), 2);
    assert_eq!(facts.hreflang[0].lang, "en");
    assert_eq!(facts.hreflang[1].href, "https://example.com/de");
}

#[test]
fn root_relative_links_are_internal() {
    let html = r#"<body><a href="/about">About</a></body>"#;
    let facts = facts_for(html);
    assert_eq!(facts.links.total, 1);
    assert_eq!(facts.links.internal, 1);
    assert_eq!(facts.links.external, 0);
}

#[test]
fn links_containing_the_host_are_internal() {
    let html = r#"<body><a href="https://example.com/contact">Contact</a></body>"#;
    let facts = facts_for(html);
    assert_eq!(facts.links.internal, 1);
}

#[test]
fn other_hosts_are_external() {
    let html = r#"<body><a href="https://other.com/x">Other</a></body>"#;
    let facts = facts_for(html);
    assert_eq!(facts.links.internal, 0);
    assert_eq!(facts.links.external, 1);
}

#[test]
fn non_content_schemes_are_excluded_entirely() {
    let html = r#"
        <body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:a@example.com">mail</a>
            <a href="tel:+15551234567">tel</a>
            <a href="/real">real</a>
        </body>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.links.total, 1);
    assert_eq!(facts.links.detailed_list.len(), 1);
    assert_eq!(facts.links.detailed_list[0].href, "/real");
}

#[test]
fn nofollow_is_detected_in_rel() {
    let html = r#"
        <body>
            <a href="/a" rel="nofollow">a</a>
            <a href="/b" rel="noopener nofollow">b</a>
            <a href="/c">c</a>
        </body>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.links.nofollow, 2);
    assert_eq!(facts.links.dofollow, 1);
    assert_eq!(facts.links.detailed_list[0].rel, RelPolicy::Nofollow);
    assert_eq!(facts.links.detailed_list[2].rel, RelPolicy::Dofollow);
}

#[test]
fn link_list_truncates_at_fifty_with_exact_counts() {
    let anchors: String = (0..75)
        .map(|i| format!("<a href=\"/p{i}\">p{i}</a>"))
        .collect();
    let facts = facts_for(&format!("<body>{anchors}</body>"));
    assert_eq!(facts.links.total, 75);
    assert_eq!(facts.links.detailed_list.len(), 50);
    assert!(facts.links.truncated);
}

#[test]
fn image_alt_stats_count_empty_alt_as_missing() {
    let html = r#"
        <body>
            <img src="a.png" alt="described">
            <img src="b.png" alt="">
            <img src="c.png">
        </body>
    "#;
    let facts = facts_for(html);
    assert_eq!(facts.images.total_images, 3);
    assert_eq!(facts.images.with_alt, 1);
    assert_eq!(facts.images.missing_alt, 2);
}

#[test]
fn image_src_falls_back_to_data_src() {
    let html = r#"<body><img data-src="lazy.png" alt="lazy"></body>"#;
    let facts = facts_for(html);
    assert_eq!(facts.images.detailed_list[0].src, "lazy.png");
}

#[test]
fn image_list_truncates_at_fifty_with_exact_counts() {
    let imgs: String = (0..75).map(|i| format!("<img src=\"i{i}.png\">")).collect();
    let facts = facts_for(&format!("<body>{imgs}</body>"));
    assert_eq!(facts.images.total_images, 75);
    assert_eq!(facts.images.detailed_list.len(), 50);
    assert!(facts.images.truncated);
}

#[test]
fn json_ld_blocks_are_parsed_individually() {
    let html = r#"
        <head>
            <script type="application/ld+json">{"@type": "WebPage"}</script>
            <script type="application/ld+json">not json at all</script>
            <script type="application/ld+json">[{"@type": "Organization"}, {"@type": ["Article", "WebPage"]}]</script>
        </head>
    "#;
    let facts = facts_for(html);
    // The malformed block is skipped; the array block contributes two entries.
    assert_eq!(facts.json_ld_count, 3);
    assert_eq!(facts.schema_types, vec!["WebPage", "Organization", "Article"]);
}

#[test]
fn microdata_flag_is_independent_of_json_ld() {
    let html = r#"<body><div itemscope itemtype="https://schema.org/Person">x</div></body>"#;
    let facts = facts_for(html);
    assert!(facts.has_microdata);
    assert_eq!(facts.json_ld_count, 0);
}

#[test]
fn plain_text_excludes_script_and_style() {
    let html = r#"
        <body>
            <p>visible words</p>
            <script>var hidden = "scripted";</script>
            <style>.hidden { color: red; }</style>
        </body>
    "#;
    let facts = facts_for(html);
    assert!(facts.plain_text.contains("visible words"));
    assert!(!facts.plain_text.contains("scripted"));
    assert!(!facts.plain_text.contains("color"));
    assert_eq!(facts.word_count, 2);
}

#[test]
fn malformed_markup_never_fails() {
    let facts = facts_for("<h1>Unclosed <p>nested <a href='/x'>link");
    assert_eq!(facts.headings.h1, 1);
    assert_eq!(facts.links.total, 1);
}

#[test]
fn analysis_is_idempotent() {
    let html = r#"
        <html><head>
            <title>Idempotent</title>
            <meta property="og:description" content="d">
            <script type="application/ld+json">{"@type": "WebPage"}</script>
        </head><body>
            <h1>One</h1><a href="/a">a</a><img src="x.png">
            <p>some body text</p>
        </body></html>
    "#;
    let first = facts_for(html);
    let second = facts_for(html);
    assert_eq!(first.title, second.title);
    assert_eq!(first.description, second.description);
    assert_eq!(first.headings, second.headings);
    assert_eq!(first.links, second.links);
    assert_eq!(first.images, second.images);
    assert_eq!(first.schema_types, second.schema_types);
    assert_eq!(first.plain_text, second.plain_text);
    assert_eq!(first.issues, second.issues);
}

#[test]
fn no_base_url_still_classifies_root_relative_links() {
    let html = r#"<body><a href="/about">a</a><a href="https://example.com/b">b</a></body>"#;
    let facts = derive_facts(&PageDocument::parse(html), None);
    // Without a host, only the leading-slash rule can mark links internal.
    assert_eq!(facts.links.internal, 1);
    assert_eq!(facts.links.external, 1);
}
