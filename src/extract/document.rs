//! Page-level markup facts.
//!
//! Each function answers one question about the document (its title, its
//! viewport declaration, how many landmarks it has, ...) by pattern matching
//! over the raw HTML.

use super::patterns::{
    read_attribute, H1_RE, HTML_TAG_RE, INSECURE_REFERENCE_RE, JSON_LD_RE, LANDMARK_RES,
    LINK_TAG_RE, MEDIA_QUERY_RE, META_TAG_RE, MICRODATA_RE, STYLE_TAG_RE, TITLE_RE,
};

/// Open Graph properties counted for coverage.
const OPEN_GRAPH_PROPERTIES: [&str; 4] = ["og:title", "og:description", "og:image", "og:url"];

/// Text of the first `<title>` element, trimmed. `None` when absent or empty.
pub fn title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// `content` of the first `<meta name="...">` tag with the given name.
fn meta_named(html: &str, name: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let tag_name = read_attribute("name", tag)?;
        if tag_name.trim().eq_ignore_ascii_case(name) {
            Some(read_attribute("content", tag).unwrap_or_default())
        } else {
            None
        }
    })
}

/// `href` of the first `<link>` whose `rel` list contains `rel`.
fn link_with_rel(html: &str, rel: &str) -> Option<String> {
    LINK_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let rels = read_attribute("rel", tag)?;
        if rels
            .split_ascii_whitespace()
            .any(|r| r.eq_ignore_ascii_case(rel))
        {
            Some(read_attribute("href", tag).unwrap_or_default())
        } else {
            None
        }
    })
}

/// Meta description content, trimmed. `None` when absent or empty.
pub fn meta_description(html: &str) -> Option<String> {
    meta_named(html, "description")
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Viewport meta content, lowercased with whitespace removed.
///
/// `Some("")` when the tag exists without content.
pub fn viewport_content(html: &str) -> Option<String> {
    meta_named(html, "viewport").map(|content| {
        content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase()
    })
}

/// Number of `<h1>` elements.
pub fn count_h1(html: &str) -> usize {
    H1_RE.find_iter(html).count()
}

/// `href` of the canonical link, if declared.
pub fn canonical_href(html: &str) -> Option<String> {
    link_with_rel(html, "canonical")
}

/// Web app manifest `href`, if linked.
pub fn manifest_link(html: &str) -> Option<String> {
    link_with_rel(html, "manifest")
}

/// Apple touch icon `href`, if linked (including the `-precomposed` variant).
pub fn apple_touch_icon_link(html: &str) -> Option<String> {
    link_with_rel(html, "apple-touch-icon")
        .or_else(|| link_with_rel(html, "apple-touch-icon-precomposed"))
}

/// How many of og:title, og:description, og:image and og:url are declared.
pub fn open_graph_coverage(html: &str) -> usize {
    let declared: Vec<String> = META_TAG_RE
        .find_iter(html)
        .filter_map(|m| read_attribute("property", m.as_str()))
        .map(|p| p.trim().to_ascii_lowercase())
        .collect();

    OPEN_GRAPH_PROPERTIES
        .iter()
        .filter(|property| declared.iter().any(|d| d == *property))
        .count()
}

/// JSON-LD script or microdata attributes present.
pub fn has_structured_data(html: &str) -> bool {
    JSON_LD_RE.is_match(html) || MICRODATA_RE.is_match(html)
}

/// `lang` of the root `<html>` element. `None` when absent or empty.
pub fn html_lang(html: &str) -> Option<String> {
    HTML_TAG_RE
        .find(html)
        .and_then(|m| read_attribute("lang", m.as_str()))
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

/// Number of inline `<style>` blocks.
pub fn count_inline_styles(html: &str) -> usize {
    STYLE_TAG_RE.find_iter(html).count()
}

/// Number of `@media` rules that mention `max-width`, `min-width` or `screen`.
pub fn count_media_queries(html: &str) -> usize {
    MEDIA_QUERY_RE.find_iter(html).count()
}

/// Number of resource tags that load something over plain `http://`.
pub fn count_insecure_references(html: &str) -> usize {
    INSECURE_REFERENCE_RE.find_iter(html).count()
}

/// How many of the main, navigation, banner and contentinfo landmarks are present.
pub fn count_landmarks(html: &str) -> usize {
    LANDMARK_RES.iter().filter(|re| re.is_match(html)).count()
}
