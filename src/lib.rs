//! page_audit library: single-page web audits
//!
//! This library fetches one web page and scores it in five categories
//! (performance, SEO, security, mobile and accessibility), combining them into
//! a weighted total with a traffic-light status per category.
//!
//! Scoring works on the raw HTML with pattern matching; nothing is rendered and
//! no sub-resources are downloaded.
//!
//! # Example
//!
//! ```no_run
//! use page_audit::{Auditor, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auditor = Auditor::new(&Config::default())?;
//! let report = auditor.audit("example.com").await?;
//! println!("{}: {}/100", report.url, report.total_score);
//! # Ok(())
//! # }
//! ```
//!
//! Already fetched pages can be scored without any I/O through
//! [`audit_page`].
//!
//! # Requirements
//!
//! Fetching requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod analysis;
mod app;
pub mod config;
mod error_handling;
pub mod extract;
mod fetch;
pub mod initialization;
mod models;
pub mod report;
pub mod server;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AuditError, ErrorType, FetchError, InitializationError};
pub use fetch::fetch_page;
pub use models::{RawInput, ResponseHeaders};
pub use report::{AuditReport, Category, Status};
pub use run::{audit_page, audit_page_at, run_audit, Auditor};

// Internal run module (validate, fetch, analyze, report)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use chrono::{DateTime, Utc};
    use log::{info, warn};

    use crate::analysis::{
        analyze_accessibility, analyze_mobile, analyze_performance, analyze_security, analyze_seo,
    };
    use crate::app::validate_and_normalize_url;
    use crate::config::Config;
    use crate::error_handling::{AuditError, InitializationError};
    use crate::extract::extract_resources;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::models::RawInput;
    use crate::report::{build_report, AuditReport, CategoryResults};

    /// Scores an already fetched page, stamped with the current time.
    ///
    /// Pure apart from reading the clock: the same input always yields the same
    /// scores and findings.
    pub fn audit_page(input: &RawInput) -> AuditReport {
        audit_page_at(input, Utc::now())
    }

    /// Scores an already fetched page, stamped with `analyzed_at`.
    pub fn audit_page_at(input: &RawInput, analyzed_at: DateTime<Utc>) -> AuditReport {
        let inventory = extract_resources(&input.html);

        // The analyzers share nothing but read-only input, so the order is irrelevant
        let results = CategoryResults {
            performance: analyze_performance(input.response_time_ms, &input.html, &inventory),
            seo: analyze_seo(&input.html, &input.url),
            security: analyze_security(&input.url, &input.headers, &input.html),
            mobile: analyze_mobile(&input.html),
            accessibility: analyze_accessibility(&input.html),
        };

        build_report(&input.url, input.response_time_ms, analyzed_at, results)
    }

    /// Audits the page at `url`: validate, fetch, analyze, report.
    ///
    /// # Errors
    ///
    /// - `AuditError::InvalidUrl` before any request is made
    /// - `AuditError::Fetch` if the page cannot be fetched; no partial report is
    ///   produced
    pub async fn run_audit(
        client: &reqwest::Client,
        url: &str,
        max_body_bytes: usize,
    ) -> Result<AuditReport, AuditError> {
        let url = validate_and_normalize_url(url)?;
        info!("Auditing {}", url);

        let start_time = Instant::now();
        let input = fetch_page(client, &url, max_body_bytes)
            .await
            .inspect_err(|e| warn!("Failed to fetch {} ({}): {}", url, e.error_type(), e))?;

        let report = audit_page(&input);
        info!(
            "Audited {} in {}ms: total score {}",
            report.url,
            start_time.elapsed().as_millis(),
            report.total_score
        );
        Ok(report)
    }

    /// Reusable audit runner holding one HTTP client.
    ///
    /// Cheap to share behind an `Arc`; concurrent audits do not interact.
    #[derive(Debug, Clone)]
    pub struct Auditor {
        client: Arc<reqwest::Client>,
        max_body_bytes: usize,
    }

    impl Auditor {
        /// Creates an auditor with a client built from `config`.
        ///
        /// # Errors
        ///
        /// Returns `InitializationError::HttpClientError` if the client cannot be built.
        pub fn new(config: &Config) -> Result<Self, InitializationError> {
            Ok(Self::with_client(init_client(config)?, config.max_body_bytes))
        }

        /// Creates an auditor around an existing client.
        pub fn with_client(client: Arc<reqwest::Client>, max_body_bytes: usize) -> Self {
            Self {
                client,
                max_body_bytes,
            }
        }

        /// Audits the page at `url`. See [`run_audit`].
        pub async fn audit(&self, url: &str) -> Result<AuditReport, AuditError> {
            run_audit(&self.client, url, self.max_body_bytes).await
        }
    }
}
