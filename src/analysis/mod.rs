//! Category analyzers.
//!
//! Five pure functions, one per category, each scoring the page from 100
//! downwards against a static rule table:
//!
//! - [`analyze_performance`]: latency, document weight, resource loading
//! - [`analyze_seo`]: title, description, headings, canonical, Open Graph
//! - [`analyze_security`]: https and security headers
//! - [`analyze_mobile`]: viewport, responsive images and media queries
//! - [`analyze_accessibility`]: language, alt text, landmarks
//!
//! Analyzers never fail; missing markup simply yields default facts.

mod accessibility;
mod mobile;
mod performance;
mod rules;
mod security;
mod seo;
mod types;

pub use accessibility::analyze_accessibility;
pub use mobile::analyze_mobile;
pub use performance::analyze_performance;
pub use rules::{clamp_score, MAX_SCORE};
pub use security::analyze_security;
pub use seo::analyze_seo;
pub use types::{CategoryResult, Finding, FindingKind, MetricValue, Metrics, Severity};
