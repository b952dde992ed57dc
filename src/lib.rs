//! Product image extraction for e-commerce pages.
//!
//! Finds the URLs of real product photos in a product page while discarding
//! banners, logos and icons:
//! - Entity decoding and image URL scanning over raw markup
//! - Keyword and size-hint classification with an escalation ladder
//!   (keywords, then size hints, then OpenGraph/Twitter/microdata metadata)
//! - Generic or named-site ranking, category grouping and high-res picks
//!
//! The pipeline is pure. Fetching lives in [`fetch`]; C callers use [`ffi`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod ffi;
pub mod pipeline;
pub mod ranking;

pub use config::{ExtractorConfig, SiteProfile, DEFAULT_CONFIG};
pub use error::{ExtractorError, Result};
pub use extractors::MetaImages;
pub use pipeline::*;
pub use ranking::{Category, Groups, RankingStrategy};
