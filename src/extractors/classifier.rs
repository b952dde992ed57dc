//! Keyword and size-hint classification of scanned candidates.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::ExtractorConfig;

/// Size-hint patterns, tried in order. The first capture group is the size.
static RE_SIZE_HINTS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // 1920x1080, 800_600
        Regex::new(r"(?i)(\d{3,4})[x_](\d{3,4})").unwrap(),
        // w_1600, h_800
        Regex::new(r"(?i)[wh]_(\d{3,4})").unwrap(),
        // ?w=720
        Regex::new(r"(?i)[?&]w=(\d{3,4})").unwrap(),
        // ?width=1024
        Regex::new(r"(?i)[?&]width=(\d{3,4})").unwrap(),
    ]
});

/// Bucket assigned to a single candidate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Matched an exclude keyword. Final, whatever else matches.
    Excluded,
    /// Matched an include keyword.
    KeywordMatch,
    /// No keyword, but the size hint reached the threshold.
    SizeFallback(u32),
    /// Nothing to go on; discarded.
    Unmatched,
}

/// Classify one URL. Independent of every other candidate.
pub fn classify(url: &str, config: &ExtractorConfig) -> Classification {
    let lower = url.to_lowercase();

    if contains_any(&lower, &config.exclude_keywords) {
        return Classification::Excluded;
    }
    if contains_any(&lower, &config.include_keywords) {
        return Classification::KeywordMatch;
    }

    match size_hint(url) {
        Some(size) if size >= config.min_fallback_size => Classification::SizeFallback(size),
        _ => Classification::Unmatched,
    }
}

/// True when `url` contains any exclude keyword.
pub fn is_excluded(url: &str, config: &ExtractorConfig) -> bool {
    contains_any(&url.to_lowercase(), &config.exclude_keywords)
}

/// Pixel size embedded in the URL, from the first pattern that matches.
pub fn size_hint(url: &str) -> Option<u32> {
    RE_SIZE_HINTS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| !needle.is_empty() && haystack.contains(needle.as_str()))
}

/// Deduplicated candidate sets, each in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSets {
    /// Keyword matches.
    pub primary: Vec<String>,
    /// Size-hint matches, used only when `primary` is empty.
    pub fallback: Vec<String>,
}

/// Classify every scanned URL and split them into primary and fallback sets.
pub fn partition_candidates<I, S>(urls: I, config: &ExtractorConfig) -> CandidateSets
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sets = CandidateSets::default();
    let mut seen = HashSet::new();

    for url in urls {
        let url = url.as_ref();
        if !seen.insert(url.to_string()) {
            continue;
        }
        match classify(url, config) {
            Classification::KeywordMatch => sets.primary.push(url.to_string()),
            Classification::SizeFallback(_) => sets.fallback.push(url.to_string()),
            Classification::Excluded | Classification::Unmatched => {}
        }
    }

    sets
}
