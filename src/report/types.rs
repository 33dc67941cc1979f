//! Report types.
//!
//! Everything here serializes to the public JSON shape of an audit.

use serde::Serialize;
use strum_macros::EnumIter;

use crate::analysis::{CategoryResult, Finding, Metrics};
use crate::config::{
    BENCHMARK_ACCESSIBILITY, BENCHMARK_MOBILE, BENCHMARK_PERFORMANCE, BENCHMARK_SECURITY,
    BENCHMARK_SEO, STATUS_GREEN_MIN, STATUS_ORANGE_MIN, STATUS_YELLOW_MIN, WEIGHT_ACCESSIBILITY,
    WEIGHT_MOBILE, WEIGHT_PERFORMANCE, WEIGHT_SECURITY, WEIGHT_SEO,
};

/// Audit categories.
///
/// Use `Category::iter()` (from `strum::IntoEnumIterator`) to visit all five
/// in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Server latency and resource loading
    Performance,
    /// Search engine optimization
    Seo,
    /// Transport and header security
    Security,
    /// Small-screen friendliness
    Mobile,
    /// Assistive technology support
    Accessibility,
}

impl Category {
    /// Returns the JSON key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Seo => "seo",
            Category::Security => "security",
            Category::Mobile => "mobile",
            Category::Accessibility => "accessibility",
        }
    }

    /// Weight of this category in the total score, in percent.
    pub fn weight(&self) -> u32 {
        match self {
            Category::Performance => WEIGHT_PERFORMANCE,
            Category::Seo => WEIGHT_SEO,
            Category::Security => WEIGHT_SECURITY,
            Category::Mobile => WEIGHT_MOBILE,
            Category::Accessibility => WEIGHT_ACCESSIBILITY,
        }
    }

    /// Reference score shown next to this category.
    pub fn benchmark(&self) -> u8 {
        match self {
            Category::Performance => BENCHMARK_PERFORMANCE,
            Category::Seo => BENCHMARK_SEO,
            Category::Security => BENCHMARK_SECURITY,
            Category::Mobile => BENCHMARK_MOBILE,
            Category::Accessibility => BENCHMARK_ACCESSIBILITY,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Traffic-light rating of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// 90 and above
    Green,
    /// 70 to 89
    Yellow,
    /// 50 to 69
    Orange,
    /// Below 50
    Red,
}

impl Status {
    /// Rates a score. Every value maps to exactly one status.
    pub fn from_score(score: u8) -> Self {
        if score >= STATUS_GREEN_MIN {
            Status::Green
        } else if score >= STATUS_YELLOW_MIN {
            Status::Yellow
        } else if score >= STATUS_ORANGE_MIN {
            Status::Orange
        } else {
            Status::Red
        }
    }
}

/// Reference scores for all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Benchmarks {
    /// Performance benchmark
    pub performance: u8,
    /// SEO benchmark
    pub seo: u8,
    /// Security benchmark
    pub security: u8,
    /// Mobile benchmark
    pub mobile: u8,
    /// Accessibility benchmark
    pub accessibility: u8,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            performance: Category::Performance.benchmark(),
            seo: Category::Seo.benchmark(),
            security: Category::Security.benchmark(),
            mobile: Category::Mobile.benchmark(),
            accessibility: Category::Accessibility.benchmark(),
        }
    }
}

/// One category as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Score in `0..=100`
    pub score: u8,
    /// Rating of `score`
    pub status: Status,
    /// Findings in emission order
    pub details: Vec<Finding>,
    /// Reference score for this category
    pub benchmark: u8,
    /// Auxiliary data, when the analyzer reports any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

impl CategoryReport {
    /// Wraps an analyzer result with its status and benchmark.
    pub fn new(category: Category, result: CategoryResult) -> Self {
        Self {
            score: result.score,
            status: Status::from_score(result.score),
            details: result.findings,
            benchmark: category.benchmark(),
            metrics: result.metrics,
        }
    }
}

/// Raw analyzer output for all five categories.
#[derive(Debug, Clone)]
pub struct CategoryResults {
    /// Performance result
    pub performance: CategoryResult,
    /// SEO result
    pub seo: CategoryResult,
    /// Security result
    pub security: CategoryResult,
    /// Mobile result
    pub mobile: CategoryResult,
    /// Accessibility result
    pub accessibility: CategoryResult,
}

/// All five category reports, keyed by category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categories {
    /// Performance report
    pub performance: CategoryReport,
    /// SEO report
    pub seo: CategoryReport,
    /// Security report
    pub security: CategoryReport,
    /// Mobile report
    pub mobile: CategoryReport,
    /// Accessibility report
    pub accessibility: CategoryReport,
}

impl Categories {
    /// Returns the report for `category`.
    pub fn get(&self, category: Category) -> &CategoryReport {
        match category {
            Category::Performance => &self.performance,
            Category::Seo => &self.seo,
            Category::Security => &self.security,
            Category::Mobile => &self.mobile,
            Category::Accessibility => &self.accessibility,
        }
    }
}

impl From<CategoryResults> for Categories {
    fn from(results: CategoryResults) -> Self {
        Self {
            performance: CategoryReport::new(Category::Performance, results.performance),
            seo: CategoryReport::new(Category::Seo, results.seo),
            security: CategoryReport::new(Category::Security, results.security),
            mobile: CategoryReport::new(Category::Mobile, results.mobile),
            accessibility: CategoryReport::new(Category::Accessibility, results.accessibility),
        }
    }
}

/// The complete result of auditing one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// URL of the audited document
    pub url: String,
    /// When the analysis ran (ISO-8601, UTC)
    pub analyzed_at: String,
    /// Fetch time in milliseconds
    pub response_time: u64,
    /// Weighted total of the category scores
    pub total_score: u8,
    /// Reference scores
    pub benchmarks: Benchmarks,
    /// Per-category results
    pub categories: Categories,
}
