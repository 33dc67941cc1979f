//! Resource inventory types.

/// A `<script>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    /// Value of the `src` attribute
    pub src: Option<String>,
    /// True when the tag has no `src`
    pub is_inline: bool,
    /// Tag text contains `async`
    pub is_async: bool,
    /// Tag text contains `defer`
    pub is_defer: bool,
    /// Tag text contains `type="module"`
    pub is_module: bool,
}

impl Script {
    /// An external script that neither loads async nor is deferred.
    pub fn is_blocking(&self) -> bool {
        !self.is_inline && !self.is_async && !self.is_defer
    }
}

/// A `<link rel="stylesheet">` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    /// Value of the `href` attribute
    pub href: String,
    /// Tag text mentions `preload`
    pub is_preload: bool,
}

/// An `<img>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    /// Value of the `src` attribute
    pub src: Option<String>,
    /// The tag carries an `alt` attribute (possibly empty)
    pub has_alt: bool,
    /// Value of the `alt` attribute
    pub alt_text: Option<String>,
    /// `alt` is present but empty (decorative image)
    pub has_empty_alt: bool,
    /// Both `width` and `height` are present
    pub has_dimensions: bool,
    /// Leading integer of the `width` attribute
    pub width: Option<u32>,
    /// Leading integer of the `height` attribute
    pub height: Option<u32>,
    /// `loading="lazy"`
    pub has_lazy_loading: bool,
    /// The tag carries a `srcset` attribute
    pub has_srcset: bool,
    /// `src` points at a `.webp` file
    pub is_webp: bool,
    /// `src` points at an `.avif` file
    pub is_avif: bool,
    /// WebP or AVIF
    pub is_modern_format: bool,
}

/// A web font reference.
///
/// No extraction rule produces fonts yet; the inventory always holds an empty
/// list for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Font {
    /// Font file URL
    pub href: String,
}

/// An `<iframe>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Iframe {
    /// Value of the `src` attribute
    pub src: Option<String>,
    /// `loading="lazy"`
    pub has_lazy_loading: bool,
}

/// Every resource referenced by a document, in order of first appearance.
///
/// Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceInventory {
    /// Scripts, inline and external
    pub scripts: Vec<Script>,
    /// External stylesheets
    pub stylesheets: Vec<Stylesheet>,
    /// Images
    pub images: Vec<Image>,
    /// Web fonts (always empty)
    pub fonts: Vec<Font>,
    /// Embedded frames
    pub iframes: Vec<Iframe>,
}

impl ResourceInventory {
    /// Number of scripts that block rendering.
    pub fn blocking_scripts(&self) -> usize {
        self.scripts.iter().filter(|s| s.is_blocking()).count()
    }
}
