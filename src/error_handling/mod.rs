//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and auditing
//! - Error categorization for failed HTTP requests
//!
//! Audit failures fall into two classes:
//! - **Input errors**: a missing or malformed URL, rejected before any fetch
//! - **Fetch errors**: network failures, non-success status codes, oversized
//!   bodies. These fail the whole audit; no partial report is produced.

mod categorization;
mod types;

// Re-export public API
pub use types::{AuditError, ErrorType, FetchError, InitializationError};
