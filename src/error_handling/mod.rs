//! Error handling.
//!
//! Defines the failure taxonomy: fetch-layer errors are converted to values
//! and never thrown past the fetcher boundary; analyzer-internal recoverable
//! problems (malformed JSON-LD blocks) are skipped in place.

mod types;

pub use types::{AuditError, FetchError};
