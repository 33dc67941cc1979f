//! End-to-end scoring tests over already fetched pages.
//!
//! These build `RawInput` values by hand and run the full extract, analyze and
//! report pipeline without any network access.

use chrono::{TimeZone, Utc};
use page_audit::{audit_page, audit_page_at, Category, RawInput, ResponseHeaders, Status};
use strum::IntoEnumIterator;
use url::Url;

fn input(url: &str, html: &str, headers: ResponseHeaders) -> RawInput {
    RawInput {
        html: html.to_string(),
        response_time_ms: 100,
        headers,
        url: Url::parse(url).expect("test URL should parse"),
    }
}

fn messages(report: &page_audit::AuditReport, category: Category) -> Vec<String> {
    report
        .categories
        .get(category)
        .details
        .iter()
        .map(|f| f.message.clone())
        .collect()
}

#[test]
fn test_bare_http_page() {
    let report = audit_page(&input(
        "http://example.com/",
        "<html><body>Hello</body></html>",
        ResponseHeaders::new(),
    ));

    let c = &report.categories;
    assert_eq!(c.performance.score, 100);
    // title 15, description 12, h1 10, canonical 8, Open Graph 8, structured data 5, lang 3
    assert_eq!(c.seo.score, 39);
    // https 30, hsts 12, csp 10, clickjacking 8, xcto 6
    assert_eq!(c.security.score, 34);
    // viewport 25, media queries 10, manifest 5, touch icon 3
    assert_eq!(c.mobile.score, 57);
    // lang 8, landmarks 6, h1 5
    assert_eq!(c.accessibility.score, 81);

    // 25*100 + 25*39 + 20*34 + 15*57 + 15*81 = 6225
    assert_eq!(report.total_score, 62);

    assert_eq!(c.performance.status, Status::Green);
    assert_eq!(c.seo.status, Status::Red);
    assert_eq!(c.security.status, Status::Red);
    assert_eq!(c.mobile.status, Status::Orange);
    assert_eq!(c.accessibility.status, Status::Yellow);
}

#[test]
fn test_optimal_title_and_description_lengths() {
    let html = format!(
        r#"<html><head><title>{}</title><meta name="description" content="{}"></head></html>"#,
        "T".repeat(55),
        "D".repeat(155)
    );
    let report = audit_page(&input("https://example.com/", &html, ResponseHeaders::new()));
    let seo = messages(&report, Category::Seo);

    assert!(seo.iter().any(|m| m == "Title length is optimal (55 characters)"));
    assert!(!seo.iter().any(|m| m.starts_with("Title is too")));
    assert!(!seo.iter().any(|m| m.starts_with("Meta description is too")));
    assert!(!seo.iter().any(|m| m == "Missing <title> tag"));
}

#[test]
fn test_single_image_without_alt_or_dimensions() {
    let html = r#"<html><body><img src="photo.jpg"></body></html>"#;
    let report = audit_page(&input("https://example.com/", html, ResponseHeaders::new()));

    let seo = messages(&report, Category::Seo);
    assert!(seo.contains(&"1 images without alt attribute".to_string()));

    let accessibility = messages(&report, Category::Accessibility);
    assert!(accessibility.contains(&"1 images without alt text".to_string()));

    let performance = messages(&report, Category::Performance);
    assert!(!performance.iter().any(|m| m.contains("width and height")));
    assert_eq!(report.categories.performance.score, 100);
}

#[test]
fn test_six_blocking_scripts_cost_twelve_points() {
    let html = (1..=6)
        .map(|i| format!(r#"<script src="/js/{}.js"></script>"#, i))
        .collect::<String>();
    let report = audit_page(&input("https://example.com/", &html, ResponseHeaders::new()));

    assert_eq!(report.categories.performance.score, 88);
    let metrics = serde_json::to_value(&report.categories.performance.metrics).unwrap();
    assert_eq!(metrics["blockingScripts"], 6);
    assert_eq!(metrics["totalScripts"], 6);
}

#[test]
fn test_well_built_page_scores_high() {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://example.com/">
  <link rel="manifest" href="/manifest.json">
  <link rel="apple-touch-icon" href="/icon.png">
  <link rel="stylesheet" href="/main.css">
  <meta property="og:title" content="Example">
  <meta property="og:description" content="Example page">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:url" content="https://example.com/">
  <script type="application/ld+json">{{"@context":"https://schema.org"}}</script>
  <style>
    @media (max-width: 600px) {{ body {{ margin: 0; }} }}
    @media (min-width: 601px) {{ body {{ margin: 1em; }} }}
    @media screen and (orientation: landscape) {{ nav {{ display: flex; }} }}
  </style>
  <script src="/app.js" defer></script>
</head>
<body>
  <header><nav><a href="/">Home</a></nav></header>
  <main>
    <h1>Welcome</h1>
    <img src="/hero.webp" alt="Hero" width="1200" height="600" srcset="/hero-2x.webp 2x">
  </main>
  <footer>Footer</footer>
</body>
</html>"#,
        title = "A well built page about examples and how to build them",
        description = "D".repeat(120)
    );
    let headers: ResponseHeaders = [
        ("Strict-Transport-Security", "max-age=63072000"),
        ("Content-Security-Policy", "default-src 'self'; frame-ancestors 'none'"),
        ("X-Content-Type-Options", "nosniff"),
    ]
    .into_iter()
    .collect();

    let report = audit_page(&input("https://example.com/", &html, headers));
    let c = &report.categories;
    assert_eq!(c.performance.score, 100);
    assert_eq!(c.seo.score, 100);
    assert_eq!(c.security.score, 100);
    assert_eq!(c.mobile.score, 100);
    assert_eq!(c.accessibility.score, 100);
    assert_eq!(report.total_score, 100);
    for category in [&c.performance, &c.seo, &c.security, &c.mobile, &c.accessibility] {
        assert_eq!(category.status, Status::Green);
        assert!(category.details.iter().all(|f| f.is_success()));
    }
}

#[test]
fn test_report_json_shape() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let report = audit_page_at(
        &input(
            "https://example.com/",
            "<html><body>Hello</body></html>",
            ResponseHeaders::new(),
        ),
        at,
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["url"], "https://example.com/");
    assert_eq!(json["analyzedAt"], "2025-01-02T03:04:05.000Z");
    assert_eq!(json["responseTime"], 100);
    assert!(json["totalScore"].is_u64());

    let categories = json["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 5);
    for category in Category::iter() {
        assert!(categories.contains_key(category.as_str()), "{} missing", category);
    }
    for (name, category) in categories {
        let score = category["score"].as_u64().unwrap();
        assert!(score <= 100, "{} out of range", name);
        assert_eq!(category["benchmark"], json["benchmarks"][name.as_str()]);
        assert!(category["status"].is_string());
        for detail in category["details"].as_array().unwrap() {
            let has_severity = detail.get("severity").is_some();
            let has_type = detail.get("type").is_some();
            assert!(has_severity != has_type, "{}: {}", name, detail);
            assert!(detail["message"].is_string());
        }
    }
}

#[test]
fn test_audit_is_deterministic() {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let page = input(
        "https://example.com/",
        r#"<html lang="en"><img src="a.png"><script src="b.js"></script></html>"#,
        ResponseHeaders::new(),
    );
    assert_eq!(audit_page_at(&page, at), audit_page_at(&page, at));
}

#[test]
fn test_scores_stay_in_range_for_hostile_markup() {
    let html = format!(
        "{}{}{}{}",
        "<script src=x.js>".repeat(40),
        "<img src=a.jpg>".repeat(40),
        r#"<link rel="stylesheet" href="a.css">"#.repeat(20),
        "<iframe src=x></iframe>".repeat(5)
    );
    let mut page = input("http://example.com/", &html, ResponseHeaders::new());
    page.response_time_ms = 60_000;
    let report = audit_page(&page);
    for category in Category::iter() {
        assert!(report.categories.get(category).score <= 100);
    }
    assert!(report.total_score <= 100);
}
