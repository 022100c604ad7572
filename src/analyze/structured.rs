//! Structured data extraction: JSON-LD and microdata.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']")
        .unwrap_or_else(|_| Selector::parse("*:not(*)").expect("fallback selector always parses"))
});

static MICRODATA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[itemscope], [itemtype], [itemprop]")
        .unwrap_or_else(|_| Selector::parse("*:not(*)").expect("fallback selector always parses"))
});

/// Parses every `<script type="application/ld+json">` block.
///
/// A block holding a JSON array contributes each of its entries. Parse
/// failures are skipped per block so one malformed script never aborts the
/// analysis.
pub(crate) fn extract_json_ld(document: &Html) -> Vec<serde_json::Value> {
    let mut blocks = Vec::new();
    for element in document.select(&JSON_LD_SELECTOR) {
        let raw = element.text().collect::<String>();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Array(entries)) => blocks.extend(entries),
            Ok(value) => blocks.push(value),
            Err(e) => {
                debug!("Skipping malformed JSON-LD block: {e}");
            }
        }
    }
    blocks
}

/// Flattens `@type` names across all JSON-LD entries to a deduplicated list,
/// preserving first-seen order. `@type` may be a scalar or a sequence.
pub(crate) fn extract_schema_types(json_ld: &[serde_json::Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut types = Vec::new();
    let mut push = |name: &str| {
        if seen.insert(name.to_string()) {
            types.push(name.to_string());
        }
    };

    for value in json_ld {
        let Some(type_value) = value.get("@type") else {
            continue;
        };
        match type_value {
            serde_json::Value::String(name) => push(name),
            serde_json::Value::Array(names) => {
                for name in names.iter().filter_map(|n| n.as_str()) {
                    push(name);
                }
            }
            _ => {}
        }
    }
    types
}

/// True when any element carries itemscope/itemtype/itemprop, independent of
/// whether JSON-LD is present.
pub(crate) fn has_microdata(document: &Html) -> bool {
    document.select(&MICRODATA_SELECTOR).next().is_some()
}
