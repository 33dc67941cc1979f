use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use strum::IntoEnumIterator;
use url::Url;

use super::types::{AuditReport, Benchmarks, Categories, Category, CategoryResults};

/// Weighted total of five category scores, rounded half up.
///
/// Computed in integer percent so that e.g. an all-`x` page totals exactly
/// `x`.
pub fn weighted_total(score_of: impl Fn(Category) -> u8) -> u8 {
    let weighted: u32 = Category::iter()
        .map(|category| category.weight() * u32::from(score_of(category)))
        .sum();
    let total_weight: u32 = Category::iter().map(|category| category.weight()).sum();
    ((weighted + total_weight / 2) / total_weight) as u8
}

/// Assembles the final report from the five analyzer results.
pub fn build_report(
    url: &Url,
    response_time_ms: u64,
    analyzed_at: DateTime<Utc>,
    results: CategoryResults,
) -> AuditReport {
    let categories = Categories::from(results);
    let total_score = weighted_total(|category| categories.get(category).score);

    debug!(
        "Scores for {}: total {} ({})",
        url,
        total_score,
        Category::iter()
            .map(|c| format!("{}={}", c, categories.get(c).score))
            .collect::<Vec<_>>()
            .join(", ")
    );

    AuditReport {
        url: url.to_string(),
        analyzed_at: analyzed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        response_time: response_time_ms,
        total_score,
        benchmarks: Benchmarks::default(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::analysis::{CategoryResult, Finding, Metrics, Severity};
    use crate::report::types::Status;

    fn result(score: u8) -> CategoryResult {
        CategoryResult {
            score,
            findings: vec![],
            metrics: None,
        }
    }

    fn results(scores: [u8; 5]) -> CategoryResults {
        CategoryResults {
            performance: result(scores[0]),
            seo: result(scores[1]),
            security: result(scores[2]),
            mobile: result(scores[3]),
            accessibility: result(scores[4]),
        }
    }

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let total: u32 = Category::iter().map(|c| c.weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_uniform_scores_total_to_themselves() {
        for score in 0..=100u8 {
            assert_eq!(weighted_total(|_| score), score);
        }
    }

    #[test]
    fn test_weighted_total_rounds_half_up() {
        // 25*80 + 25*90 + 20*70 + 15*60 + 15*50 = 7300 -> 73
        let scores = |c: Category| match c {
            Category::Performance => 80,
            Category::Seo => 90,
            Category::Security => 70,
            Category::Mobile => 60,
            Category::Accessibility => 50,
        };
        assert_eq!(weighted_total(scores), 73);

        // 15 * 10 = 150 -> 1.5 -> 2
        let only_mobile = |c: Category| if c == Category::Mobile { 10 } else { 0 };
        assert_eq!(weighted_total(only_mobile), 2);

        // 15 * 3 = 45 -> 0.45 -> 0
        let tiny = |c: Category| if c == Category::Accessibility { 3 } else { 0 };
        assert_eq!(weighted_total(tiny), 0);
    }

    #[test]
    fn test_status_bands_are_exhaustive_and_monotonic() {
        let mut previous = Status::Red;
        for score in 0..=100u8 {
            let status = Status::from_score(score);
            assert!(status <= previous, "status got worse at {}", score);
            previous = status;
        }
        assert_eq!(Status::from_score(49), Status::Red);
        assert_eq!(Status::from_score(50), Status::Orange);
        assert_eq!(Status::from_score(69), Status::Orange);
        assert_eq!(Status::from_score(70), Status::Yellow);
        assert_eq!(Status::from_score(89), Status::Yellow);
        assert_eq!(Status::from_score(90), Status::Green);
        assert_eq!(Status::from_score(100), Status::Green);
    }

    #[test]
    fn test_build_report_json_shape() {
        let url = Url::parse("https://example.com/").unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let mut input = results([100, 90, 70, 50, 10]);
        input.seo.findings = vec![
            Finding::issue(Severity::Warning, "Title is too long (80 characters)"),
            Finding::success("Exactly one <h1> heading"),
        ];
        input.mobile.metrics = Some(Metrics::new().with("hasViewport", true));

        let report = build_report(&url, 321, at, input);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["url"], "https://example.com/");
        assert_eq!(json["analyzedAt"], "2024-05-01T12:30:00.000Z");
        assert_eq!(json["responseTime"], 321);
        // 2500 + 2250 + 1400 + 750 + 150 = 7050 -> 71 (rounded half up from 70.5)
        assert_eq!(json["totalScore"], 71);
        assert_eq!(
            json["benchmarks"],
            serde_json::json!({
                "performance": 68, "seo": 72, "security": 65, "mobile": 78, "accessibility": 62
            })
        );
        assert_eq!(json["categories"]["performance"]["status"], "green");
        assert_eq!(json["categories"]["security"]["status"], "yellow");
        assert_eq!(json["categories"]["mobile"]["status"], "orange");
        assert_eq!(json["categories"]["accessibility"]["status"], "red");
        assert_eq!(json["categories"]["seo"]["benchmark"], 72);
        assert_eq!(
            json["categories"]["seo"]["details"],
            serde_json::json!([
                {"severity": "warning", "message": "Title is too long (80 characters)"},
                {"type": "success", "message": "Exactly one <h1> heading"}
            ])
        );
        assert_eq!(
            json["categories"]["mobile"]["metrics"],
            serde_json::json!({"hasViewport": true})
        );
        assert!(json["categories"]["performance"].get("metrics").is_none());
    }
}
