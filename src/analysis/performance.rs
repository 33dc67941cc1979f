//! Performance analysis.
//!
//! Scores server latency, document weight and how the page loads its
//! resources. Only the fetched document is measured; nothing is rendered.

use super::rules::{evaluate, Rule};
use super::types::{CategoryResult, Metrics, Severity};
use crate::extract::{count_inline_styles, ResourceInventory};

/// Number of images assumed to sit above the fold and load eagerly.
const ABOVE_THE_FOLD_IMAGES: usize = 3;

struct PerformanceFacts {
    response_time_ms: u64,
    html_bytes: usize,
    total_scripts: usize,
    blocking_scripts: usize,
    external_stylesheets: usize,
    total_images: usize,
    images_without_dimensions: usize,
    eager_images_below_fold: usize,
    legacy_format_images: usize,
    eager_iframes: usize,
}

impl PerformanceFacts {
    fn html_kb(&self) -> u64 {
        (self.html_bytes as f64 / 1024.0).round() as u64
    }
}

static PERFORMANCE_RULES: &[Rule<PerformanceFacts>] = &[
    // Server response time: exactly one band applies
    Rule::penalty(
        Severity::Critical,
        25,
        |f| f.response_time_ms > 3000,
        |f| format!("Very slow server response ({}ms); aim for under 600ms", f.response_time_ms),
    ),
    Rule::penalty(
        Severity::Warning,
        15,
        |f| f.response_time_ms > 1500 && f.response_time_ms <= 3000,
        |f| format!("Slow server response ({}ms); aim for under 600ms", f.response_time_ms),
    ),
    Rule::penalty(
        Severity::Info,
        8,
        |f| f.response_time_ms > 600 && f.response_time_ms <= 1500,
        |f| format!("Server response could be faster ({}ms)", f.response_time_ms),
    ),
    Rule::success(
        |f| f.response_time_ms <= 600,
        |f| format!("Fast server response ({}ms)", f.response_time_ms),
    ),
    // Document weight
    Rule::penalty(
        Severity::Critical,
        15,
        |f| f.html_bytes > 500_000,
        |f| format!("HTML document is very large ({} KB)", f.html_kb()),
    ),
    Rule::penalty(
        Severity::Warning,
        10,
        |f| f.html_bytes > 200_000 && f.html_bytes <= 500_000,
        |f| format!("HTML document is large ({} KB)", f.html_kb()),
    ),
    Rule::penalty(
        Severity::Info,
        5,
        |f| f.html_bytes > 100_000 && f.html_bytes <= 200_000,
        |f| format!("HTML document is somewhat heavy ({} KB)", f.html_kb()),
    ),
    // Render-blocking scripts
    Rule::penalty(
        Severity::Critical,
        12,
        |f| f.blocking_scripts > 5,
        |f| format!("{} render-blocking scripts; add async or defer", f.blocking_scripts),
    ),
    Rule::penalty(
        Severity::Warning,
        6,
        |f| (2..=5).contains(&f.blocking_scripts),
        |f| format!("{} render-blocking scripts; add async or defer", f.blocking_scripts),
    ),
    // Script count
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.total_scripts > 25,
        |f| format!("Too many scripts ({})", f.total_scripts),
    ),
    Rule::penalty(
        Severity::Info,
        4,
        |f| (15..=25).contains(&f.total_scripts),
        |f| format!("High number of scripts ({})", f.total_scripts),
    ),
    // External stylesheets
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.external_stylesheets > 8,
        |f| format!("Too many external stylesheets ({}); consider bundling", f.external_stylesheets),
    ),
    Rule::penalty(
        Severity::Info,
        4,
        |f| (4..=8).contains(&f.external_stylesheets),
        |f| format!("Several external stylesheets ({})", f.external_stylesheets),
    ),
    // Images
    Rule::penalty(
        Severity::Warning,
        6,
        |f| f.total_images >= 1 && f.images_without_dimensions > 3,
        |f| {
            format!(
                "{} images without width and height attributes (causes layout shift)",
                f.images_without_dimensions
            )
        },
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.eager_images_below_fold > 5,
        |f| {
            format!(
                "{} below-the-fold images without loading=\"lazy\"",
                f.eager_images_below_fold
            )
        },
    ),
    Rule::penalty(
        Severity::Info,
        5,
        |f| f.total_images > 3 && f.legacy_format_images > 5,
        |f| format!("{} images not served as WebP or AVIF", f.legacy_format_images),
    ),
    // Iframes
    Rule::penalty(
        Severity::Info,
        3,
        |f| f.eager_iframes > 0,
        |f| format!("{} iframes without loading=\"lazy\"", f.eager_iframes),
    ),
];

/// Analyzes page performance.
///
/// # Arguments
///
/// * `response_time_ms` - Time to fetch the document
/// * `html` - The raw HTML content
/// * `inventory` - Resources extracted from `html`
///
/// # Returns
///
/// The performance score and findings, plus `responseTime`, `htmlSize` (KB),
/// `totalScripts`, `blockingScripts`, `totalStylesheets` (external plus inline
/// `<style>` blocks) and `totalImages` metrics.
pub fn analyze_performance(
    response_time_ms: u64,
    html: &str,
    inventory: &ResourceInventory,
) -> CategoryResult {
    let facts = PerformanceFacts {
        response_time_ms,
        html_bytes: html.len(),
        total_scripts: inventory.scripts.len(),
        blocking_scripts: inventory.blocking_scripts(),
        external_stylesheets: inventory.stylesheets.len(),
        total_images: inventory.images.len(),
        images_without_dimensions: inventory
            .images
            .iter()
            .filter(|i| !i.has_dimensions)
            .count(),
        eager_images_below_fold: inventory
            .images
            .iter()
            .skip(ABOVE_THE_FOLD_IMAGES)
            .filter(|i| !i.has_lazy_loading)
            .count(),
        legacy_format_images: inventory
            .images
            .iter()
            .filter(|i| i.src.is_some() && !i.is_modern_format)
            .count(),
        eager_iframes: inventory
            .iframes
            .iter()
            .filter(|i| !i.has_lazy_loading)
            .count(),
    };

    let metrics = Metrics::new()
        .with("responseTime", facts.response_time_ms)
        .with("htmlSize", facts.html_kb())
        .with("totalScripts", facts.total_scripts)
        .with("blockingScripts", facts.blocking_scripts)
        .with(
            "totalStylesheets",
            facts.external_stylesheets + count_inline_styles(html),
        )
        .with("totalImages", facts.total_images);

    evaluate(PERFORMANCE_RULES, &facts).with_metrics(metrics)
}
