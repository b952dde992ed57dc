//! Image URL scanning over decoded markup.
//!
//! This is a text scan rather than a DOM walk: product galleries are often
//! embedded in inline JSON, `srcset` lists or data attributes that never
//! surface as `<img src>`.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https?://[^"'\s]+\.(?:jpg|jpeg|png|webp|avif)(?:\?[^"'\s]*)?"#).unwrap()
});

/// Every image URL in `html`, in document order. Duplicates are kept.
pub fn scan_image_urls(html: &str) -> Vec<String> {
    RE_IMAGE_URL
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True when `url` is a complete image-file reference.
pub fn is_image_url(url: &str) -> bool {
    RE_IMAGE_URL
        .find(url)
        .is_some_and(|m| m.start() == 0 && m.end() == url.len())
}
