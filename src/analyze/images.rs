//! Image alt-text analysis.

use serde::Serialize;

use crate::config::DETAIL_LIST_LIMIT;

use super::document::ImageRecord;

/// Aggregated image alt-text counts plus a truncated detail list.
///
/// `truncated = true` means the counts are exact but the detailed list is
/// partial.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageFacts {
    /// Every `<img>` contributes one record.
    pub total_images: usize,
    /// Images with non-empty alt text.
    pub with_alt: usize,
    /// Images with an absent or empty alt attribute.
    pub missing_alt: usize,
    /// Up to the first `DETAIL_LIST_LIMIT` image records.
    pub detailed_list: Vec<ImageRecord>,
    /// True when the detailed list was cut off.
    pub truncated: bool,
}

/// Computes alt-text statistics over every image on the page.
pub fn image_alt_stats(images: &[ImageRecord]) -> ImageFacts {
    let total_images = images.len();
    let with_alt = images.iter().filter(|img| !img.alt.is_empty()).count();

    let truncated = total_images > DETAIL_LIST_LIMIT;
    let detailed_list = images.iter().take(DETAIL_LIST_LIMIT).cloned().collect();

    ImageFacts {
        total_images,
        with_alt,
        missing_alt: total_images - with_alt,
        detailed_list,
        truncated,
    }
}
