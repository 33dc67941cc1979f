//! Application-level helpers shared by the CLI and the HTTP endpoint.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
