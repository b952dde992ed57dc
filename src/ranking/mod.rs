//! Ordering, grouping and recommendation over the working set.
//!
//! Ranking is a closed set of strategies picked once per run from the source
//! URL's host: the generic tier ordering, or a named-site optimizer.

mod generic;
mod recommend;
mod site;

pub use generic::*;
pub use recommend::*;
pub use site::*;

use serde::Serialize;
use url::Url;

use crate::config::{ExtractorConfig, SiteProfile};

/// Display category derived from URL substrings. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hero,
    Premium,
    Default,
    Alternative,
    Other,
}

impl Category {
    pub const PRIORITY: [Category; 5] = [
        Category::Hero,
        Category::Premium,
        Category::Default,
        Category::Alternative,
        Category::Other,
    ];

    /// Categorize a URL. Markers are matched case-sensitively.
    pub fn of(url: &str, config: &ExtractorConfig) -> Self {
        let has = |marker: &str| !marker.is_empty() && url.contains(marker);

        if config.hero_markers.iter().any(|m| has(m)) {
            Category::Hero
        } else if has(&config.premium_marker) {
            Category::Premium
        } else if has(&config.default_marker) {
            Category::Default
        } else if has(&config.alternative_marker) {
            Category::Alternative
        } else {
            Category::Other
        }
    }
}

/// URLs partitioned by category, each list in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Groups {
    pub hero: Vec<String>,
    pub premium: Vec<String>,
    pub default: Vec<String>,
    pub alternative: Vec<String>,
    pub other: Vec<String>,
}

impl Groups {
    pub fn from_ranked(urls: &[String], config: &ExtractorConfig) -> Self {
        let mut groups = Groups::default();
        for url in urls {
            groups.get_mut(Category::of(url, config)).push(url.clone());
        }
        groups
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Hero => &self.hero,
            Category::Premium => &self.premium,
            Category::Default => &self.default,
            Category::Alternative => &self.alternative,
            Category::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Hero => &mut self.hero,
            Category::Premium => &mut self.premium,
            Category::Default => &mut self.default,
            Category::Alternative => &mut self.alternative,
            Category::Other => &mut self.other,
        }
    }

    /// First URL of the highest-priority non-empty category.
    pub fn main_image(&self) -> Option<&str> {
        Category::PRIORITY
            .iter()
            .find_map(|&category| self.get(category).first())
            .map(String::as_str)
    }
}

/// The working set after ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranked {
    /// Ranked URLs, without duplicates.
    pub images: Vec<String>,
    /// Set when a site profile's optimizer produced the order.
    pub site_ordered: bool,
}

impl Ranked {
    /// The head of a site-ordered list; otherwise the category priority pick.
    pub fn main_image<'r>(&'r self, groups: &'r Groups) -> Option<&'r str> {
        if self.site_ordered {
            self.images.first().map(String::as_str)
        } else {
            groups.main_image()
        }
    }
}

/// How the working set is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingStrategy<'a> {
    /// Tier markers, then scan order.
    Generic,
    /// Identifier grouping for a named site, falling back to `Generic`.
    Site(&'a SiteProfile),
}

impl<'a> RankingStrategy<'a> {
    /// Pick the strategy for a source URL. Unparseable URLs rank generically.
    pub fn select(source_url: &str, config: &'a ExtractorConfig) -> Self {
        source_host(source_url)
            .and_then(|host| config.site_for_host(&host))
            .map_or(RankingStrategy::Generic, RankingStrategy::Site)
    }

    pub fn name(&self) -> &str {
        match self {
            RankingStrategy::Generic => "generic",
            RankingStrategy::Site(site) => &site.name,
        }
    }

    /// Order the working set. The output never contains duplicates.
    pub fn rank(&self, urls: &[String], config: &ExtractorConfig) -> Ranked {
        let generic = || Ranked {
            images: rank_generic(urls, config),
            site_ordered: false,
        };

        match self {
            RankingStrategy::Generic => generic(),
            RankingStrategy::Site(site) => {
                let optimized = optimize_for_site(urls, site);
                if optimized.is_empty() {
                    tracing::debug!(
                        site = %site.name,
                        "site grouping found nothing, ranking generically"
                    );
                    generic()
                } else {
                    Ranked {
                        images: optimized,
                        site_ordered: true,
                    }
                }
            }
        }
    }
}

/// Lowercased host of `url`.
pub fn source_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}
