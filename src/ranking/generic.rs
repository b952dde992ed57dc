use std::collections::HashSet;

use crate::config::ExtractorConfig;

use super::Category;

/// Stable tier ordering: hero, premium, default, alternative, then the rest.
/// URLs within a tier keep their scan order. Duplicates are dropped.
pub fn rank_generic(urls: &[String], config: &ExtractorConfig) -> Vec<String> {
    let mut ranked = dedup_preserving_order(urls);
    ranked.sort_by_key(|url| Category::of(url, config));
    ranked
}

/// Drop repeated URLs, keeping the first occurrence.
fn dedup_preserving_order(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.iter()
        .filter(|url| seen.insert(*url))
        .cloned()
        .collect()
}
