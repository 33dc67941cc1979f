//! Resource inventory extraction.

use super::patterns::{
    leading_integer, read_attribute, IFRAME_TAG_RE, IMG_TAG_RE, SCRIPT_TAG_RE, STYLESHEET_LINK_RE,
};
use super::types::{Iframe, Image, ResourceInventory, Script, Stylesheet};

/// Extracts the resource inventory of an HTML document.
///
/// Every list is in order of first appearance and keeps duplicates. `fonts` is
/// always empty.
///
/// # Arguments
///
/// * `html` - The raw HTML content
///
/// # Returns
///
/// The inventory of scripts, stylesheets, images, fonts and iframes.
pub fn extract_resources(html: &str) -> ResourceInventory {
    let inventory = ResourceInventory {
        scripts: extract_scripts(html),
        stylesheets: extract_stylesheets(html),
        images: extract_images(html),
        fonts: Vec::new(),
        iframes: extract_iframes(html),
    };

    log::debug!(
        "Extracted {} scripts, {} stylesheets, {} images, {} iframes",
        inventory.scripts.len(),
        inventory.stylesheets.len(),
        inventory.images.len(),
        inventory.iframes.len()
    );

    inventory
}

/// Extracts every `<script>` opening tag.
///
/// `async`, `defer` and `type="module"` are detected by substring presence in
/// the tag text, so an attribute value that happens to contain one of those
/// words sets the flag too.
fn extract_scripts(html: &str) -> Vec<Script> {
    SCRIPT_TAG_RE
        .find_iter(html)
        .map(|m| {
            let tag = m.as_str();
            let lower = tag.to_ascii_lowercase();
            let src = read_attribute("src", tag);
            Script {
                is_inline: src.is_none(),
                src,
                is_async: lower.contains("async"),
                is_defer: lower.contains("defer"),
                is_module: lower.contains("type=\"module\"") || lower.contains("type='module'"),
            }
        })
        .collect()
}

/// Extracts `<link rel="stylesheet" href="...">` tags (rel before href).
fn extract_stylesheets(html: &str) -> Vec<Stylesheet> {
    STYLESHEET_LINK_RE
        .captures_iter(html)
        .filter_map(|cap| {
            let tag = cap.get(0)?.as_str();
            let href = cap.get(1)?.as_str().to_string();
            Some(Stylesheet {
                href,
                is_preload: tag.to_ascii_lowercase().contains("preload"),
            })
        })
        .collect()
}

/// Extracts every `<img>` tag.
///
/// Each attribute is read independently, so a tag with one malformed attribute
/// still reports the others.
pub fn extract_images(html: &str) -> Vec<Image> {
    IMG_TAG_RE
        .find_iter(html)
        .map(|m| parse_image(m.as_str()))
        .collect()
}

fn parse_image(tag: &str) -> Image {
    let src = read_attribute("src", tag);
    let alt_text = read_attribute("alt", tag);
    let width_attr = read_attribute("width", tag);
    let height_attr = read_attribute("height", tag);
    let has_lazy_loading = read_attribute("loading", tag)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("lazy"));

    let src_lower = src.as_deref().unwrap_or_default().to_ascii_lowercase();
    let is_webp = src_lower.contains(".webp");
    let is_avif = src_lower.contains(".avif");

    Image {
        has_alt: alt_text.is_some(),
        has_empty_alt: alt_text.as_deref().is_some_and(|a| a.trim().is_empty()),
        has_dimensions: width_attr.is_some() && height_attr.is_some(),
        width: width_attr.as_deref().and_then(leading_integer),
        height: height_attr.as_deref().and_then(leading_integer),
        has_lazy_loading,
        has_srcset: read_attribute("srcset", tag).is_some(),
        is_webp,
        is_avif,
        is_modern_format: is_webp || is_avif,
        alt_text,
        src,
    }
}

/// Extracts every `<iframe>` tag.
fn extract_iframes(html: &str) -> Vec<Iframe> {
    IFRAME_TAG_RE
        .find_iter(html)
        .map(|m| {
            let tag = m.as_str();
            Iframe {
                src: read_attribute("src", tag),
                has_lazy_loading: read_attribute("loading", tag)
                    .is_some_and(|v| v.trim().eq_ignore_ascii_case("lazy")),
            }
        })
        .collect()
}
