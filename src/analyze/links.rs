//! Link classification.
//!
//! Classification is purely textual: a link is internal when its href starts
//! with `/` or contains the page's hostname. No network calls are made to
//! resolve relative paths.

use serde::Serialize;
use url::Url;

use crate::config::DETAIL_LIST_LIMIT;

use super::document::RawAnchor;

/// Schemes that are not content links and are excluded from all counts.
const EXCLUDED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:"];

/// Follow policy derived from the rel attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelPolicy {
    /// rel does not contain nofollow.
    Dofollow,
    /// rel contains nofollow.
    Nofollow,
}

/// One classified content link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// The href as served.
    pub href: String,
    /// Collapsed visible text.
    pub text: String,
    /// Whether the link points at the audited host.
    pub internal: bool,
    /// dofollow/nofollow per the rel attribute.
    pub rel: RelPolicy,
}

/// Aggregated link counts plus a truncated detail list.
///
/// `truncated = true` means the counts are exact but the detailed list is
/// partial.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkFacts {
    /// Content links in total (excluded schemes not counted).
    pub total: usize,
    /// Links classified internal.
    pub internal: usize,
    /// Links classified external.
    pub external: usize,
    /// Links whose rel contains nofollow.
    pub nofollow: usize,
    /// Links without nofollow.
    pub dofollow: usize,
    /// Up to the first `DETAIL_LIST_LIMIT` classified links.
    pub detailed_list: Vec<LinkRecord>,
    /// True when the detailed list was cut off.
    pub truncated: bool,
}

/// Classifies every anchor against the page host derived from `base_url`.
pub fn classify_links(anchors: &[RawAnchor], base_url: Option<&str>) -> LinkFacts {
    let host = base_url
        .and_then(|u| Url::parse(u).ok())
        .and_then(|u| u.host_str().map(str::to_string));

    let mut facts = LinkFacts::default();
    let mut detailed = Vec::new();

    for anchor in anchors {
        let href = anchor.href.trim();
        if href.is_empty() || is_excluded_scheme(href) {
            continue;
        }

        let internal =
            href.starts_with('/') || host.as_deref().is_some_and(|h| href.contains(h));
        let nofollow = anchor
            .rel
            .as_deref()
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("nofollow"));

        facts.total += 1;
        if internal {
            facts.internal += 1;
        } else {
            facts.external += 1;
        }
        if nofollow {
            facts.nofollow += 1;
        } else {
            facts.dofollow += 1;
        }

        detailed.push(LinkRecord {
            href: href.to_string(),
            text: anchor.text.clone(),
            internal,
            rel: if nofollow {
                RelPolicy::Nofollow
            } else {
                RelPolicy::Dofollow
            },
        });
    }

    if detailed.len() > DETAIL_LIST_LIMIT {
        detailed.truncate(DETAIL_LIST_LIMIT);
        facts.truncated = true;
    }
    facts.detailed_list = detailed;
    facts
}

fn is_excluded_scheme(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    EXCLUDED_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
