//! URL validation and normalization utilities.
//!
//! Scheme defaulting happens here, at the boundary: the fetcher itself
//! performs no normalization and expects an absolute http/https URL.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds an https:// prefix if no scheme is present, then validates that the
/// URL is syntactically valid and uses an http/https scheme. Rejects URLs
/// longer than `MAX_URL_LENGTH`. Logs a warning and returns `None` if the
/// URL is invalid, too long, or uses an unsupported scheme.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        // Char-based prefix: a byte slice could split a multibyte character.
        let prefix: String = url.chars().take(50).collect();
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            prefix
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    // The prefix can push a borderline URL over the limit.
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting normalized URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Rejecting unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Rejecting invalid URL: {url}");
            None
        }
    }
}
