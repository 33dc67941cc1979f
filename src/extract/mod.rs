//! HTML extraction.
//!
//! This module turns raw HTML text into the facts the analyzers score:
//! - A resource inventory (scripts, stylesheets, images, fonts, iframes)
//! - Page-level markup facts (title, meta tags, headings, landmarks, ...)
//!
//! Extraction is regex-based pattern matching rather than DOM parsing. It never
//! fails: anything it does not recognize simply yields `None`, `false`, zero or
//! an empty list. Malformed or partial tags still contribute whatever
//! attributes can be read from them.

mod document;
mod patterns;
mod resources;
mod types;

// Re-export public API
pub use document::{
    apple_touch_icon_link, canonical_href, count_h1, count_inline_styles,
    count_insecure_references, count_landmarks, count_media_queries, has_structured_data,
    html_lang, manifest_link, meta_description, open_graph_coverage, title, viewport_content,
};
pub use resources::{extract_images, extract_resources};
pub use types::{Font, Iframe, Image, ResourceInventory, Script, Stylesheet};
