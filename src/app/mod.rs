//! Application-level utilities: logging setup and URL normalization.

pub mod logging;
pub mod url;

pub use logging::init_logger;
pub use url::validate_and_normalize_url;
