//! Compiled regex patterns shared by the extractors.

use regex::Regex;
use std::sync::LazyLock;

// Tag patterns: each match is the full opening tag text
const SCRIPT_TAG_PATTERN: &str = r"(?i)<script\b[^>]*>";
const IMG_TAG_PATTERN: &str = r"(?i)<img\b[^>]*>";
const IFRAME_TAG_PATTERN: &str = r"(?i)<iframe\b[^>]*>";
const META_TAG_PATTERN: &str = r"(?i)<meta\b[^>]*>";
const LINK_TAG_PATTERN: &str = r"(?i)<link\b[^>]*>";
const HTML_TAG_PATTERN: &str = r"(?i)<html\b[^>]*>";
// rel must come before href; `<link href=... rel="stylesheet">` is not matched
const STYLESHEET_LINK_PATTERN: &str =
    r#"(?i)<link\b[^>]*\brel\s*=\s*["']?stylesheet["']?[^>]*\bhref\s*=\s*["']([^"']*)["'][^>]*>"#;

// Document patterns
const TITLE_PATTERN: &str = r"(?is)<title\b[^>]*>(.*?)</title>";
const H1_PATTERN: &str = r"(?i)<h1\b";
const STYLE_TAG_PATTERN: &str = r"(?i)<style\b";
const JSON_LD_PATTERN: &str = r#"(?i)<script\b[^>]*\btype\s*=\s*["']?application/ld\+json"#;
const MICRODATA_PATTERN: &str = r"(?i)\s(?:itemscope|itemtype\s*=)";
const MEDIA_QUERY_PATTERN: &str = r"(?i)@media[^{]*\b(?:max-width|min-width|screen)\b";
const INSECURE_REFERENCE_PATTERN: &str = r#"(?i)<(?:script|img|iframe|link|source|video|audio|embed|object)\b[^>]*\s(?:src|href|data)\s*=\s*["']?http://"#;

// Landmarks: element or equivalent ARIA role
const MAIN_LANDMARK_PATTERN: &str = r#"(?i)<main\b|\brole\s*=\s*["']?main\b"#;
const NAV_LANDMARK_PATTERN: &str = r#"(?i)<nav\b|\brole\s*=\s*["']?navigation\b"#;
const HEADER_LANDMARK_PATTERN: &str = r#"(?i)<header\b|\brole\s*=\s*["']?banner\b"#;
const FOOTER_LANDMARK_PATTERN: &str = r#"(?i)<footer\b|\brole\s*=\s*["']?contentinfo\b"#;

// One attribute token: name, then an optional double-quoted, single-quoted or
// bare value. Quoted values are consumed whole so their words never read as names.
const ATTRIBUTE_PATTERN: &str =
    r#"([^\s"'=<>/]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#;

/// Helper function to compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

pub(super) static SCRIPT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SCRIPT_TAG_PATTERN, "SCRIPT_TAG_RE"));
pub(super) static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMG_TAG_PATTERN, "IMG_TAG_RE"));
pub(super) static IFRAME_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IFRAME_TAG_PATTERN, "IFRAME_TAG_RE"));
pub(super) static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(META_TAG_PATTERN, "META_TAG_RE"));
pub(super) static LINK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINK_TAG_PATTERN, "LINK_TAG_RE"));
pub(super) static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HTML_TAG_PATTERN, "HTML_TAG_RE"));
pub(super) static STYLESHEET_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(STYLESHEET_LINK_PATTERN, "STYLESHEET_LINK_RE"));

pub(super) static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TITLE_PATTERN, "TITLE_RE"));
pub(super) static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(H1_PATTERN, "H1_RE"));
pub(super) static STYLE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(STYLE_TAG_PATTERN, "STYLE_TAG_RE"));
pub(super) static JSON_LD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(JSON_LD_PATTERN, "JSON_LD_RE"));
pub(super) static MICRODATA_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MICRODATA_PATTERN, "MICRODATA_RE"));
pub(super) static MEDIA_QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MEDIA_QUERY_PATTERN, "MEDIA_QUERY_RE"));
pub(super) static INSECURE_REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(INSECURE_REFERENCE_PATTERN, "INSECURE_REFERENCE_RE")
});

pub(super) static LANDMARK_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        compile_regex_unsafe(MAIN_LANDMARK_PATTERN, "MAIN_LANDMARK_RE"),
        compile_regex_unsafe(NAV_LANDMARK_PATTERN, "NAV_LANDMARK_RE"),
        compile_regex_unsafe(HEADER_LANDMARK_PATTERN, "HEADER_LANDMARK_RE"),
        compile_regex_unsafe(FOOTER_LANDMARK_PATTERN, "FOOTER_LANDMARK_RE"),
    ]
});

static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ATTRIBUTE_PATTERN, "ATTRIBUTE_RE"));

/// Reads one attribute from a tag's text.
///
/// Walks the attributes after the tag name in order and returns the first
/// whose name matches case-insensitively: `None` when absent, `Some("")` when
/// present without a value.
pub(super) fn read_attribute(name: &str, tag: &str) -> Option<String> {
    let body = tag.trim_start_matches('<');
    let attributes = body
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .map_or("", |i| &body[i..]);

    ATTRIBUTE_RE
        .captures_iter(attributes)
        .find(|cap| cap.get(1).is_some_and(|n| n.as_str().eq_ignore_ascii_case(name)))
        .map(|cap| {
            cap.get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
}

/// Parses the leading digits of an attribute value (`"120px"` -> 120).
pub(super) fn leading_integer(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_attribute_quoting_styles() {
        assert_eq!(
            read_attribute("src", r#"<img src="a.png">"#),
            Some("a.png".to_string())
        );
        assert_eq!(
            read_attribute("src", "<img src='b.png'>"),
            Some("b.png".to_string())
        );
        assert_eq!(
            read_attribute("src", "<img src=c.png alt=x>"),
            Some("c.png".to_string())
        );
    }

    #[test]
    fn test_read_attribute_bare_and_missing() {
        assert_eq!(read_attribute("alt", "<img alt src=x.png>"), Some(String::new()));
        assert_eq!(read_attribute("alt", "<img alt>"), Some(String::new()));
        assert_eq!(read_attribute("alt", "<img src=x.png>"), None);
    }

    #[test]
    fn test_read_attribute_ignores_prefixed_names() {
        assert_eq!(read_attribute("src", r#"<img data-src="lazy.png">"#), None);
        assert_eq!(read_attribute("src", r#"<img srcset="a.png 2x">"#), None);
    }

    #[test]
    fn test_read_attribute_skips_words_inside_other_values() {
        let tag = r#"<img src="a.png" title="no alt provided">"#;
        assert_eq!(read_attribute("alt", tag), None);
        assert_eq!(read_attribute("src", tag), Some("a.png".to_string()));

        let tag = r#"<script data-note="no src here">"#;
        assert_eq!(read_attribute("src", tag), None);

        let tag = r#"<img title='width height loading' src=late.png>"#;
        assert_eq!(read_attribute("width", tag), None);
        assert_eq!(read_attribute("loading", tag), None);
        assert_eq!(read_attribute("src", tag), Some("late.png".to_string()));
    }

    #[test]
    fn test_read_attribute_first_occurrence_wins() {
        assert_eq!(
            read_attribute("src", r#"<img alt="src=fake.png" src="real.png" src="dup.png">"#),
            Some("real.png".to_string())
        );
    }

    #[test]
    fn test_read_attribute_self_closing_tag() {
        assert_eq!(read_attribute("alt", "<img alt/>"), Some(String::new()));
        assert_eq!(
            read_attribute("src", "<img src=x.png />"),
            Some("x.png".to_string())
        );
    }

    #[test]
    fn test_read_attribute_is_case_insensitive() {
        assert_eq!(
            read_attribute("src", r#"<IMG SRC="UP.PNG">"#),
            Some("UP.PNG".to_string())
        );
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("120"), Some(120));
        assert_eq!(leading_integer(" 64px"), Some(64));
        assert_eq!(leading_integer("auto"), None);
        assert_eq!(leading_integer(""), None);
    }
}
