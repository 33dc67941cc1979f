//! SEO analysis.

use url::Url;

use super::rules::{evaluate, Rule};
use super::types::{CategoryResult, Metrics, Severity};
use crate::extract::{
    canonical_href, count_h1, extract_images, has_structured_data, html_lang, meta_description,
    open_graph_coverage, title,
};

struct SeoFacts {
    title_len: Option<usize>,
    description_len: Option<usize>,
    h1_count: usize,
    canonical: Option<String>,
    canonical_foreign_host: Option<String>,
    open_graph_tags: usize,
    images_missing_alt: usize,
    has_structured_data: bool,
    has_lang: bool,
}

fn title_len_between(f: &SeoFacts, min: usize, max: usize) -> bool {
    f.title_len.is_some_and(|len| (min..=max).contains(&len))
}

fn description_len_between(f: &SeoFacts, min: usize, max: usize) -> bool {
    f.description_len
        .is_some_and(|len| (min..=max).contains(&len))
}

static SEO_RULES: &[Rule<SeoFacts>] = &[
    // Title
    Rule::penalty(
        Severity::Critical,
        15,
        |f| f.title_len.is_none(),
        |_| "Missing <title> tag".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        10,
        |f| title_len_between(f, 1, 9),
        |f| format!("Title is too short ({} characters)", f.title_len.unwrap_or_default()),
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.title_len.is_some_and(|len| len > 70),
        |f| format!("Title is too long ({} characters)", f.title_len.unwrap_or_default()),
    ),
    Rule::success(
        |f| title_len_between(f, 50, 60),
        |f| format!("Title length is optimal ({} characters)", f.title_len.unwrap_or_default()),
    ),
    // Meta description
    Rule::penalty(
        Severity::Critical,
        12,
        |f| f.description_len.is_none(),
        |_| "Missing meta description".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        6,
        |f| description_len_between(f, 1, 69),
        |f| {
            format!(
                "Meta description is too short ({} characters)",
                f.description_len.unwrap_or_default()
            )
        },
    ),
    Rule::penalty(
        Severity::Info,
        3,
        |f| f.description_len.is_some_and(|len| len > 160),
        |f| {
            format!(
                "Meta description is too long ({} characters)",
                f.description_len.unwrap_or_default()
            )
        },
    ),
    Rule::success(
        |f| description_len_between(f, 70, 160),
        |f| {
            format!(
                "Meta description length is good ({} characters)",
                f.description_len.unwrap_or_default()
            )
        },
    ),
    // Headings
    Rule::penalty(
        Severity::Critical,
        10,
        |f| f.h1_count == 0,
        |_| "No <h1> heading".to_string(),
    ),
    Rule::penalty(
        Severity::Warning,
        5,
        |f| f.h1_count > 1,
        |f| format!("Multiple <h1> headings ({})", f.h1_count),
    ),
    Rule::success(|f| f.h1_count == 1, |_| "Exactly one <h1> heading".to_string()),
    // Canonical
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.canonical.is_none(),
        |_| "Missing canonical link".to_string(),
    ),
    Rule::success(
        |f| f.canonical.is_some(),
        |f| match &f.canonical_foreign_host {
            Some(host) => format!(
                "Canonical link set: {} (points to another host: {})",
                f.canonical.as_deref().unwrap_or_default(),
                host
            ),
            None => format!(
                "Canonical link set: {}",
                f.canonical.as_deref().unwrap_or_default()
            ),
        },
    ),
    // Open Graph
    Rule::penalty(
        Severity::Warning,
        8,
        |f| f.open_graph_tags == 0,
        |_| "No Open Graph tags (og:title, og:description, og:image, og:url)".to_string(),
    ),
    Rule::penalty(
        Severity::Info,
        4,
        |f| (1..=3).contains(&f.open_graph_tags),
        |f| format!("Incomplete Open Graph tags ({}/4)", f.open_graph_tags),
    ),
    Rule::success(
        |f| f.open_graph_tags == 4,
        |_| "Complete Open Graph tags (4/4)".to_string(),
    ),
    // Image alt text
    Rule::scaled(
        Severity::Warning,
        |f| (f.images_missing_alt as u32 * 2).min(10),
        |f| f.images_missing_alt > 0,
        |f| format!("{} images without alt attribute", f.images_missing_alt),
    ),
    // Structured data
    Rule::penalty(
        Severity::Info,
        5,
        |f| !f.has_structured_data,
        |_| "No structured data (JSON-LD or microdata)".to_string(),
    ),
    Rule::success(
        |f| f.has_structured_data,
        |_| "Structured data present".to_string(),
    ),
    // Language
    Rule::penalty(
        Severity::Info,
        3,
        |f| !f.has_lang,
        |_| "Missing lang attribute on <html>".to_string(),
    ),
];

/// Host of `href` when it resolves to a different host than `page`.
fn foreign_host(page: &Url, href: &str) -> Option<String> {
    let resolved = page.join(href).ok()?;
    let host = resolved.host_str()?;
    if page
        .host_str()
        .is_some_and(|page_host| page_host.eq_ignore_ascii_case(host))
    {
        None
    } else {
        Some(host.to_string())
    }
}

/// Analyzes on-page SEO.
///
/// Lengths are counted in characters, not bytes.
///
/// # Arguments
///
/// * `html` - The raw HTML content
/// * `url` - URL of the page, used to resolve the canonical link
pub fn analyze_seo(html: &str, url: &Url) -> CategoryResult {
    let canonical = canonical_href(html);
    let facts = SeoFacts {
        title_len: title(html).map(|t| t.chars().count()),
        description_len: meta_description(html).map(|d| d.chars().count()),
        h1_count: count_h1(html),
        canonical_foreign_host: canonical.as_deref().and_then(|c| foreign_host(url, c)),
        canonical,
        open_graph_tags: open_graph_coverage(html),
        images_missing_alt: extract_images(html).iter().filter(|i| !i.has_alt).count(),
        has_structured_data: has_structured_data(html),
        has_lang: html_lang(html).is_some(),
    };

    let metrics = Metrics::new()
        .with("titleLength", facts.title_len.unwrap_or_default())
        .with("descriptionLength", facts.description_len.unwrap_or_default())
        .with("h1Count", facts.h1_count)
        .with("openGraphTags", facts.open_graph_tags)
        .with("imagesMissingAlt", facts.images_missing_alt);

    evaluate(SEO_RULES, &facts).with_metrics(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::MetricValue;

    fn page() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    /// A page that passes every SEO check.
    fn complete_page(title: &str, description: &str) -> String {
        format!(
            r#"<!DOCTYPE html><html lang="en"><head>
            <title>{title}</title>
            <meta name="description" content="{description}">
            <link rel="canonical" href="https://example.com/page">
            <meta property="og:title" content="t">
            <meta property="og:description" content="d">
            <meta property="og:image" content="/i.png">
            <meta property="og:url" content="https://example.com/page">
            <script type="application/ld+json">{{"@type":"WebPage"}}</script>
            </head><body><h1>Heading</h1><img src="a.png" alt="A"></body></html>"#
        )
    }

    #[test]
    fn test_optimal_lengths_have_no_penalty() {
        let html = complete_page(&"t".repeat(55), &"d".repeat(155));
        let result = analyze_seo(&html, &page());
        assert_eq!(result.score, 100);
        assert!(result.mentions("Title length is optimal (55 characters)"));
        assert_eq!(result.issues().count(), 0);
    }

    #[test]
    fn test_title_length_bands() {
        let short = analyze_seo(&complete_page("Home", &"d".repeat(100)), &page());
        assert_eq!(short.score, 90);

        let long = analyze_seo(&complete_page(&"t".repeat(71), &"d".repeat(100)), &page());
        assert_eq!(long.score, 95);

        // 10..=49 and 61..=70 are neither penalized nor praised
        let plain = analyze_seo(&complete_page(&"t".repeat(30), &"d".repeat(100)), &page());
        assert_eq!(plain.score, 100);
        assert!(!plain.mentions("Title length"));
    }

    #[test]
    fn test_description_length_bands() {
        let title = "t".repeat(55);
        assert_eq!(analyze_seo(&complete_page(&title, "short"), &page()).score, 94);
        assert_eq!(
            analyze_seo(&complete_page(&title, &"d".repeat(161)), &page()).score,
            97
        );
        assert_eq!(
            analyze_seo(&complete_page(&title, &"d".repeat(70)), &page()).score,
            100
        );
    }

    #[test]
    fn test_bare_page_penalties() {
        let html = r#"<html><body><img src="a.png"><img src="b.png"></body></html>"#;
        let result = analyze_seo(html, &page());
        // 15 + 12 + 10 + 8 + 8 + 4 (2 images) + 5 + 3
        assert_eq!(result.score, 35);
        assert!(result.mentions("Missing <title> tag"));
        assert!(result.mentions("2 images without alt attribute"));
        assert_eq!(result.findings.iter().filter(|f| f.is_success()).count(), 0);
    }

    #[test]
    fn test_alt_penalty_is_capped() {
        let html = complete_page(&"t".repeat(55), &"d".repeat(100))
            .replace("</body>", &format!("{}</body>", "<img src=x.png>".repeat(8)));
        let result = analyze_seo(&html, &page());
        assert_eq!(result.score, 90);
        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.get("imagesMissingAlt"), Some(MetricValue::Integer(8)));
    }

    #[test]
    fn test_multiple_h1() {
        let html = complete_page(&"t".repeat(55), &"d".repeat(100))
            .replace("</body>", "<h1>Second</h1></body>");
        let result = analyze_seo(&html, &page());
        assert_eq!(result.score, 95);
        assert!(result.mentions("Multiple <h1> headings (2)"));
    }

    #[test]
    fn test_partial_open_graph() {
        let html = complete_page(&"t".repeat(55), &"d".repeat(100))
            .replace(r#"<meta property="og:url" content="https://example.com/page">"#, "");
        let result = analyze_seo(&html, &page());
        assert_eq!(result.score, 96);
        assert!(result.mentions("Incomplete Open Graph tags (3/4)"));
    }

    #[test]
    fn test_canonical_to_other_host_is_noted_without_penalty() {
        let html = complete_page(&"t".repeat(55), &"d".repeat(100)).replace(
            r#"<link rel="canonical" href="https://example.com/page">"#,
            r#"<link rel="canonical" href="https://mirror.example.org/page">"#,
        );
        let result = analyze_seo(&html, &page());
        assert_eq!(result.score, 100);
        assert!(result.mentions("points to another host: mirror.example.org"));
    }

    #[test]
    fn test_relative_canonical_is_same_host() {
        assert_eq!(foreign_host(&page(), "/other"), None);
        assert_eq!(
            foreign_host(&page(), "https://cdn.example.net/x"),
            Some("cdn.example.net".to_string())
        );
    }
}
