//! Mobile friendliness analysis.

use super::rules::{evaluate, Rule};
use super::types::{CategoryResult, Metrics, Severity};
use crate::extract::{
    apple_touch_icon_link, count_media_queries, extract_images, manifest_link, viewport_content,
};

struct MobileFacts {
    /// Normalized viewport content (lowercase, no whitespace)
    viewport: Option<String>,
    total_images: usize,
    images_with_srcset: usize,
    media_queries: usize,
    has_manifest: bool,
    has_touch_icon: bool,
}

impl MobileFacts {
    fn viewport_has(&self, directive: &str) -> bool {
        self.viewport
            .as_deref()
            .is_some_and(|v| v.split([',', ';']).any(|d| d == directive))
    }

    fn viewport_value(&self, key: &str) -> Option<&str> {
        self.viewport.as_deref().and_then(|v| {
            v.split([',', ';'])
                .find_map(|d| d.strip_prefix(key)?.strip_prefix('='))
        })
    }

    /// `maximum-scale` of 1 or less, in any spelling, or `user-scalable=no`.
    fn blocks_zoom(&self) -> bool {
        self.viewport_value("maximum-scale")
            .and_then(|v| v.parse::<f64>().ok())
            .is_some_and(|scale| scale <= 1.0)
            || self.viewport_has("user-scalable=no")
    }
}

static MOBILE_RULES: &[Rule<MobileFacts>] = &[
    Rule::penalty(
        Severity::Critical,
        25,
        |f| f.viewport.is_none(),
        |_| "Missing viewport meta tag".to_string(),
    ),
    Rule::success(
        |f| f.viewport_has("width=device-width"),
        |_| "Viewport uses width=device-width".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        10,
        |f| f.viewport.is_some() && !f.viewport_has("width=device-width"),
        |_| "Viewport does not set width=device-width".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.blocks_zoom(),
        |_| "Viewport prevents zooming (maximum-scale=1 or user-scalable=no)".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.total_images > 5 && f.images_with_srcset == 0,
        |f| format!("{} images and none use srcset", f.total_images),
    ),
    Rule::success(
        |f| f.images_with_srcset > 0,
        |f| format!("Responsive images ({} with srcset)", f.images_with_srcset),
    ),
    Rule::penalty(
        Severity::Warning,
        10,
        |f| f.media_queries == 0,
        |_| "No responsive media queries found".to_string(),
    ),
    Rule::success(
        |f| f.media_queries >= 3,
        |f| format!("{} responsive media queries", f.media_queries),
    ),
    Rule::penalty(
        Severity::Info,
        5,
        |f| !f.has_manifest,
        |_| "No web app manifest linked".to_string(),
    ),
    Rule::success(|f| f.has_manifest, |_| "Web app manifest linked".to_string()),
    Rule::penalty(
        Severity::Info,
        3,
        |f| !f.has_touch_icon,
        |_| "No apple-touch-icon".to_string(),
    ),
];

/// Analyzes how well the page adapts to small screens.
pub fn analyze_mobile(html: &str) -> CategoryResult {
    let images = extract_images(html);
    let facts = MobileFacts {
        viewport: viewport_content(html),
        total_images: images.len(),
        images_with_srcset: images.iter().filter(|i| i.has_srcset).count(),
        media_queries: count_media_queries(html),
        has_manifest: manifest_link(html).is_some(),
        has_touch_icon: apple_touch_icon_link(html).is_some(),
    };

    let metrics = Metrics::new()
        .with("hasViewport", facts.viewport.is_some())
        .with("mediaQueries", facts.media_queries)
        .with("imagesWithSrcset", facts.images_with_srcset);

    evaluate(MOBILE_RULES, &facts).with_metrics(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::MetricValue;

    const HEAD: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1">
        <link rel="manifest" href="/site.webmanifest">
        <link rel="apple-touch-icon" href="/icon.png">
        <style>
            @media (max-width: 600px) { a {} }
            @media (min-width: 601px) { a {} }
            @media screen and (orientation: landscape) { a {} }
        </style>"#;

    #[test]
    fn test_well_built_page() {
        let result = analyze_mobile(HEAD);
        assert_eq!(result.score, 100);
        assert!(result.mentions("Viewport uses width=device-width"));
        assert!(result.mentions("3 responsive media queries"));
    }

    #[test]
    fn test_bare_page() {
        let result = analyze_mobile("<html><body>Hello</body></html>");
        // 25 + 10 + 5 + 3
        assert_eq!(result.score, 57);
        assert_eq!(result.findings.len(), 4);
        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.get("hasViewport"), Some(MetricValue::Bool(false)));
    }

    #[test]
    fn test_fixed_width_viewport() {
        let html = HEAD.replace("width=device-width, initial-scale=1", "width=1024");
        let result = analyze_mobile(&html);
        assert_eq!(result.score, 90);
        assert!(result.mentions("Viewport does not set width=device-width"));
    }

    #[test]
    fn test_zoom_blocking_viewport() {
        let html = HEAD.replace(
            "initial-scale=1",
            "initial-scale=1, maximum-scale=1, user-scalable=no",
        );
        let result = analyze_mobile(&html);
        // one penalty no matter how many zoom blockers
        assert_eq!(result.score, 95);
    }

    #[test]
    fn test_maximum_scale_one_in_any_spelling_blocks_zoom() {
        for scale in ["1", "1.0", "1.00", "0.5"] {
            let html = HEAD.replace(
                "initial-scale=1",
                &format!("initial-scale=1, maximum-scale={}", scale),
            );
            let result = analyze_mobile(&html);
            assert_eq!(result.score, 95, "maximum-scale={}", scale);
        }
    }

    #[test]
    fn test_larger_maximum_scale_is_fine() {
        let html = HEAD.replace("initial-scale=1", "maximum-scale=10");
        assert_eq!(analyze_mobile(&html).score, 100);
        let html = HEAD.replace("initial-scale=1", "maximum-scale=1.5");
        assert_eq!(analyze_mobile(&html).score, 100);
    }

    #[test]
    fn test_images_without_srcset() {
        let six = "<img src=a.png>".repeat(6);
        let result = analyze_mobile(&format!("{}{}", HEAD, six));
        assert_eq!(result.score, 92);

        let five = "<img src=a.png>".repeat(5);
        assert_eq!(analyze_mobile(&format!("{}{}", HEAD, five)).score, 100);
    }

    #[test]
    fn test_srcset_success_note() {
        let html = format!(
            r#"{}<img src="a.png" srcset="a-2x.png 2x">{}"#,
            HEAD,
            "<img src=b.png>".repeat(6)
        );
        let result = analyze_mobile(&html);
        assert_eq!(result.score, 100);
        assert!(result.mentions("Responsive images (1 with srcset)"));
    }

    #[test]
    fn test_few_media_queries_are_neutral() {
        let html = HEAD.replace("@media screen and (orientation: landscape) { a {} }", "");
        let result = analyze_mobile(&html);
        assert_eq!(result.score, 100);
        assert!(!result.mentions("responsive media queries"));
    }
}
