//! Keyword lists, thresholds and site profiles driving the pipeline.
//!
//! Everything here is plain data. The defaults reproduce the built-in lists;
//! a TOML file may override any field (missing fields keep their default).

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractorError, Result};

/// Shared default configuration.
pub static DEFAULT_CONFIG: Lazy<ExtractorConfig> = Lazy::new(ExtractorConfig::default);

/// Tunables for classification, ranking and recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Substrings that reject a URL outright (checked first, case-insensitive).
    pub exclude_keywords: Vec<String>,
    /// Substrings that mark a URL as a product image (case-insensitive).
    pub include_keywords: Vec<String>,
    /// Minimum size hint, in pixels, for the size-based fallback tier.
    pub min_fallback_size: u32,
    /// Markers that rank a URL as the hero shot.
    pub hero_markers: Vec<String>,
    pub premium_marker: String,
    pub default_marker: String,
    pub alternative_marker: String,
    /// Width tokens treated as high resolution by the recommender.
    pub high_res_markers: Vec<String>,
    /// Maximum number of recommended high-resolution URLs.
    pub max_recommended: usize,
    /// Sites with a dedicated ranking strategy.
    pub sites: Vec<SiteProfile>,
}

/// A named site whose filenames embed a numeric style identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Display name, echoed into the result as the strategy name.
    pub name: String,
    /// Registrable domains this profile applies to (`www.` is ignored).
    pub domains: Vec<String>,
    /// Number of digits in the embedded identifier (`-<digits>.jpg`).
    #[serde(default = "default_id_digits")]
    pub id_digits: usize,
    /// Identifier prefix reserved for close-up product shots; ranked first.
    #[serde(default)]
    pub reserved_prefix: Option<String>,
    /// Resolution tokens in order of preference. One variant is kept per identifier.
    #[serde(default)]
    pub width_preference: Vec<String>,
}

fn default_id_digits() -> usize {
    13
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            exclude_keywords: strings(&[
                "wrapping",
                "banner",
                "favicon",
                "logo",
                "chanelmoi",
                "icon",
                "sprite",
                "bg",
                "background",
                "thumbnail",
                "thumb",
                "social",
                "facebook",
                "twitter",
                "instagram",
                "avatar",
                "badge",
            ]),
            include_keywords: strings(&[
                "packshot", "product", "pdp", "image", "media", "item", "goods", "catalog",
                "zoom", "large", "swatch", "hero", "main", "primary",
            ]),
            min_fallback_size: 320,
            hero_markers: strings(&["hero", "main", "primary"]),
            premium_marker: "packshot-premium".to_string(),
            default_marker: "packshot-default".to_string(),
            alternative_marker: "packshot-alternative".to_string(),
            high_res_markers: strings(&["w_1920", "w_1240"]),
            max_recommended: 3,
            sites: vec![SiteProfile {
                name: "Chanel".to_string(),
                domains: strings(&["chanel.com"]),
                id_digits: default_id_digits(),
                reserved_prefix: Some("9543169".to_string()),
                width_preference: strings(&["w_1600", "w_3200"]),
            }],
        }
    }
}

impl ExtractorConfig {
    /// Parse a TOML document; absent fields fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(source)?;
        config.normalize();
        Ok(config)
    }

    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| ExtractorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&source)
    }

    /// Find the site profile whose domain matches `host`.
    pub fn site_for_host(&self, host: &str) -> Option<&SiteProfile> {
        let host = host.strip_prefix("www.").unwrap_or(host);
        self.sites.iter().find(|site| {
            site.domains.iter().any(|domain| {
                host == domain.as_str()
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|rest| rest.ends_with('.'))
            })
        })
    }

    // Keyword checks run against lowercased URLs, so the lists must be lowercase too.
    fn normalize(&mut self) {
        for keyword in self
            .exclude_keywords
            .iter_mut()
            .chain(self.include_keywords.iter_mut())
        {
            *keyword = keyword.to_lowercase();
        }
        for site in &mut self.sites {
            for domain in &mut site.domains {
                let lower = domain.trim().to_lowercase();
                *domain = lower.strip_prefix("www.").unwrap_or(&lower).to_string();
            }
        }
    }
}
