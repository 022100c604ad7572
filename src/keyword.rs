//! Keyword frequency, density, and stuffing classification.

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::config::{KEYWORD_STUFFING_MAX_OCCURRENCES, KEYWORD_STUFFING_MAX_RATIO};

/// Keyword usage metrics for one focus keyword.
///
/// All-zero metrics with an empty keyword mean "no keyword analysis
/// performed", not "keyword absent from the page".
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    /// The keyword as supplied (trimmed).
    pub keyword: String,
    /// Whole-word/whole-phrase occurrences in the page text.
    pub frequency: u64,
    /// `frequency / total_word_count * 100`, rounded to two decimals;
    /// 0 when the page has no words.
    pub density: f64,
    /// True when frequency exceeds 30 occurrences or 5% of all words.
    pub stuffing_flag: bool,
}

impl KeywordMetrics {
    fn none() -> Self {
        KeywordMetrics {
            keyword: String::new(),
            frequency: 0,
            density: 0.0,
            stuffing_flag: false,
        }
    }
}

/// Computes keyword metrics over the analyzer's plain-text extraction.
///
/// Text and keyword are lowercased with punctuation stripped to whitespace,
/// then the keyword is matched as a whole word (whole phrase for multi-word
/// keywords, with interior whitespace matching flexible whitespace runs).
/// An empty keyword yields the all-zero shape.
pub fn compute_keyword_metrics(
    plain_text: &str,
    total_word_count: usize,
    keyword: &str,
) -> KeywordMetrics {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return KeywordMetrics::none();
    }

    let normalized_text = normalize(plain_text);
    let frequency = match phrase_pattern(keyword) {
        Some(re) => re.find_iter(&normalized_text).count() as u64,
        None => 0,
    };

    let density = if total_word_count == 0 {
        0.0
    } else {
        round2(frequency as f64 / total_word_count as f64 * 100.0)
    };

    let ratio = if total_word_count == 0 {
        0.0
    } else {
        frequency as f64 / total_word_count as f64
    };
    let stuffing_flag =
        frequency > KEYWORD_STUFFING_MAX_OCCURRENCES || ratio > KEYWORD_STUFFING_MAX_RATIO;

    debug!("Keyword '{keyword}': {frequency} occurrences, density {density:.2}%");

    KeywordMetrics {
        keyword: keyword.to_string(),
        frequency,
        density,
        stuffing_flag,
    }
}

/// Lowercases and maps every non-alphanumeric character to a space, so
/// punctuation never splits or glues matches.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Builds the whole-phrase matcher from a normalized keyword. Interior
/// whitespace becomes a flexible whitespace run.
fn phrase_pattern(keyword: &str) -> Option<Regex> {
    let normalized = normalize(keyword);
    let parts: Vec<String> = normalized
        .split_whitespace()
        .map(regex::escape)
        .collect();
    if parts.is_empty() {
        return None;
    }
    let pattern = format!(r"\b{}\b", parts.join(r"\s+"));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Failed to build keyword pattern for {keyword:?}: {e}");
            None
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keyword_means_no_analysis() {
        let metrics = compute_keyword_metrics("some text here", 3, "");
        assert_eq!(metrics.frequency, 0);
        assert_eq!(metrics.density, 0.0);
        assert!(!metrics.stuffing_flag);
    }

    #[test]
    fn whole_word_matching_is_case_insensitive() {
        let metrics = compute_keyword_metrics("SEO tips and seo tricks, not pseudoseo", 7, "seo");
        assert_eq!(metrics.frequency, 2);
    }

    #[test]
    fn punctuation_does_not_block_matches() {
        let metrics = compute_keyword_metrics("Learn SEO, master SEO. SEO!", 5, "seo");
        assert_eq!(metrics.frequency, 3);
    }

    #[test]
    fn multi_word_phrase_matches_flexible_whitespace() {
        let text = "seo audit today, another seo   audit tomorrow";
        let metrics = compute_keyword_metrics(text, 7, "seo audit");
        assert_eq!(metrics.frequency, 2);
    }

    #[test]
    fn density_rounds_to_two_decimals() {
        // 1 occurrence in 3 words: 33.333...% -> 33.33
        let metrics = compute_keyword_metrics("alpha beta gamma", 3, "alpha");
        assert_eq!(metrics.density, 33.33);
    }

    #[test]
    fn zero_word_count_gives_zero_density() {
        let metrics = compute_keyword_metrics("", 0, "seo");
        assert_eq!(metrics.frequency, 0);
        assert_eq!(metrics.density, 0.0);
        assert!(!metrics.stuffing_flag);
    }

    #[test]
    fn stuffing_by_absolute_count() {
        // 31 occurrences with 1000 words: ratio 3.1% < 5%, but count > 30.
        let text = "seo ".repeat(31);
        let metrics = compute_keyword_metrics(&text, 1000, "seo");
        assert_eq!(metrics.frequency, 31);
        assert!(metrics.stuffing_flag);
    }

    #[test]
    fn no_stuffing_at_exactly_thirty() {
        let text = "seo ".repeat(30);
        let metrics = compute_keyword_metrics(&text, 1000, "seo");
        assert_eq!(metrics.frequency, 30);
        assert!(!metrics.stuffing_flag);
    }

    #[test]
    fn stuffing_by_ratio() {
        // 10 occurrences in 100 words: 10% > 5%, count <= 30.
        let text = "seo ".repeat(10);
        let metrics = compute_keyword_metrics(&text, 100, "seo");
        assert_eq!(metrics.frequency, 10);
        assert!(metrics.stuffing_flag);
    }

    #[test]
    fn absent_keyword_never_stuffs() {
        let metrics = compute_keyword_metrics("nothing relevant here", 3, "seo");
        assert_eq!(metrics.frequency, 0);
        assert_eq!(metrics.density, 0.0);
        assert!(!metrics.stuffing_flag);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn density_stays_in_range(count in 0usize..200, words in 1usize..2000) {
            let text = "kw ".repeat(count) + &"filler ".repeat(words.saturating_sub(count));
            let total = count + words.saturating_sub(count);
            let metrics = compute_keyword_metrics(&text, total.max(1), "kw");
            prop_assert!(metrics.density >= 0.0);
            prop_assert!(metrics.density <= 100.0);
        }

        #[test]
        fn zero_frequency_never_flags(words in "[a-z]{2,8}( [a-z]{2,8}){0,50}") {
            // The keyword cannot appear: it uses a character class the text never does.
            let metrics = compute_keyword_metrics(&words, words.split_whitespace().count(), "z9z9z9");
            prop_assert_eq!(metrics.frequency, 0);
            prop_assert_eq!(metrics.density, 0.0);
            prop_assert!(!metrics.stuffing_flag);
        }
    }
}
