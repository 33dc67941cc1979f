//! Accessibility analysis.

use super::rules::{evaluate, Rule};
use super::types::{CategoryResult, Metrics, Severity};
use crate::extract::{count_h1, count_landmarks, extract_images, html_lang};

struct AccessibilityFacts {
    lang: Option<String>,
    total_images: usize,
    images_missing_alt: usize,
    landmarks: usize,
    h1_count: usize,
}

static ACCESSIBILITY_RULES: &[Rule<AccessibilityFacts>] = &[
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.lang.is_none(),
        |_| "Missing lang attribute on <html>; screen readers cannot pick a language".to_string(),
    ),
    Rule::success(
        |f| f.lang.is_some(),
        |f| format!("Page language declared ({})", f.lang.as_deref().unwrap_or_default()),
    ),
    Rule::scaled(
        Severity::Warning,
        |f| (f.images_missing_alt as u32 * 3).min(15),
        |f| f.images_missing_alt > 0,
        |f| format!("{} images without alt text", f.images_missing_alt),
    ),
    Rule::success(
        |f| f.total_images > 0 && f.images_missing_alt == 0,
        |_| "All images have alt text".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        6,
        |f| f.landmarks < 2,
        |f| format!("Few landmark regions ({}/4 of main, nav, header, footer)", f.landmarks),
    ),
    Rule::success(
        |f| f.landmarks == 4,
        |_| "All landmark regions present".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.h1_count == 0,
        |_| "No <h1> heading to orient assistive technology".to_string(),
    ),
];

/// Analyzes document-level accessibility.
///
/// An `alt=""` attribute counts as present; decorative images are expected to
/// use it.
pub fn analyze_accessibility(html: &str) -> CategoryResult {
    let images = extract_images(html);
    let facts = AccessibilityFacts {
        lang: html_lang(html),
        total_images: images.len(),
        images_missing_alt: images.iter().filter(|i| !i.has_alt).count(),
        landmarks: count_landmarks(html),
        h1_count: count_h1(html),
    };

    let metrics = Metrics::new()
        .with("imagesMissingAlt", facts.images_missing_alt)
        .with("landmarks", facts.landmarks)
        .with("hasLang", facts.lang.is_some());

    evaluate(ACCESSIBILITY_RULES, &facts).with_metrics(metrics)
}
