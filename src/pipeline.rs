//! The image-candidate pipeline: decode, scan, classify, escalate, rank.
//!
//! Every step is pure and total over its input. An empty result is a normal
//! outcome (`total_count == 0`), never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ExtractorConfig;
use crate::extractors::{
    decode_entities, is_excluded, partition_candidates, scan_image_urls, MetaImages,
};
use crate::ranking::{recommend_high_res, Groups, RankingStrategy};

/// A fetched or rendered product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub source_url: String,
    pub html: String,
    /// Metadata read from a live DOM. When absent it is parsed from `html`.
    #[serde(default)]
    pub meta: Option<MetaImages>,
}

impl PageSnapshot {
    pub fn new(source_url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            html: html.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: MetaImages) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Escalation rung that produced the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Keyword,
    SizeFallback,
    MetaTag,
    None,
}

/// Everything a caller learns about one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub source_url: String,
    pub timestamp: DateTime<Utc>,
    pub main_image: Option<String>,
    pub total_count: usize,
    pub groups: Groups,
    pub recommended_high_res: Vec<String>,
    pub all_images: Vec<String>,
    pub tier: Tier,
    /// Set when only size hints, not keywords, vouch for the images.
    pub low_confidence: bool,
    pub strategy: String,
}

/// Run the pipeline, stamping the result with the current time.
pub fn extract_product_images(page: &PageSnapshot, config: &ExtractorConfig) -> ExtractionResult {
    extract_product_images_at(page, config, Utc::now())
}

/// Run the pipeline with a caller-supplied timestamp.
pub fn extract_product_images_at(
    page: &PageSnapshot,
    config: &ExtractorConfig,
    timestamp: DateTime<Utc>,
) -> ExtractionResult {
    let (tier, working_set) = resolve_working_set(page, config);

    let strategy = RankingStrategy::select(&page.source_url, config);
    let ranked = strategy.rank(&working_set, config);

    let groups = Groups::from_ranked(&ranked.images, config);
    let main_image = ranked.main_image(&groups).map(str::to_string);
    let all_images = ranked.images;
    let recommended_high_res = recommend_high_res(&all_images, config);

    info!(
        url = %page.source_url,
        strategy = strategy.name(),
        ?tier,
        count = all_images.len(),
        "extracted product images"
    );

    ExtractionResult {
        source_url: page.source_url.clone(),
        timestamp,
        main_image,
        total_count: all_images.len(),
        groups,
        recommended_high_res,
        all_images,
        tier,
        low_confidence: tier == Tier::SizeFallback,
        strategy: strategy.name().to_string(),
    }
}

/// Walk the escalation ladder: keyword matches, then size hints, then page
/// metadata. The first non-empty rung wins, however weak its evidence.
pub fn resolve_working_set(page: &PageSnapshot, config: &ExtractorConfig) -> (Tier, Vec<String>) {
    let decoded = decode_entities(&page.html);
    let scanned = scan_image_urls(&decoded);
    let sets = partition_candidates(&scanned, config);
    debug!(
        scanned = scanned.len(),
        primary = sets.primary.len(),
        fallback = sets.fallback.len(),
        "classified image candidates"
    );

    if !sets.primary.is_empty() {
        return (Tier::Keyword, sets.primary);
    }

    if !sets.fallback.is_empty() {
        warn!(
            count = sets.fallback.len(),
            "no product keywords matched, using size-hinted images"
        );
        return (Tier::SizeFallback, sets.fallback);
    }

    debug!("no image candidates in markup, trying page metadata");
    let meta = match &page.meta {
        Some(meta) => meta.clone(),
        None => MetaImages::from_html(&page.html),
    };
    let meta_urls: Vec<String> = meta
        .candidates()
        .into_iter()
        .filter(|url| is_http_url(url) && !is_excluded(url, config))
        .collect();

    if meta_urls.is_empty() {
        debug!("no product images found");
        (Tier::None, Vec::new())
    } else {
        (Tier::MetaTag, meta_urls)
    }
}

fn is_http_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}
