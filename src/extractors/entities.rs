//! HTML entity normalization ahead of URL scanning.

/// Entities decoded before scanning, in application order.
///
/// `&amp;` goes first, so `&amp;quot;` collapses all the way to `"`.
const ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Decode the handful of entities that break image URLs embedded in markup.
pub fn decode_entities(html: &str) -> String {
    if !html.contains('&') {
        return html.to_string();
    }

    ENTITIES
        .iter()
        .fold(html.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}
