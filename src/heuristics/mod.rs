//! Content heuristics: intent classification and section extraction.
//!
//! Both operate off the same parsed document as the analyzer and are
//! independent of each other.

mod intent;
mod sections;

pub use intent::{classify_intent, Intent};
pub use sections::{extract_sections, ContentSection};
