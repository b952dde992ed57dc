use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExtractorConfig;

static RE_WIDTH_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"w_\d+").unwrap());
static RE_LARGE_DIMENSIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}[x_]\d{4}").unwrap());

/// Up to `max_recommended` URLs that look full-size, in ranked order.
///
/// A URL qualifies when it carries a known high-width token, a four-digit
/// dimension pair, or no `w_<digits>` token at all (not explicitly downscaled).
pub fn recommend_high_res(urls: &[String], config: &ExtractorConfig) -> Vec<String> {
    urls.iter()
        .filter(|url| is_high_res(url, config))
        .take(config.max_recommended)
        .cloned()
        .collect()
}

fn is_high_res(url: &str, config: &ExtractorConfig) -> bool {
    config
        .high_res_markers
        .iter()
        .any(|marker| url.contains(marker.as_str()))
        || RE_LARGE_DIMENSIONS.is_match(url)
        || !RE_WIDTH_TOKEN.is_match(url)
}
