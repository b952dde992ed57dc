//! Page metadata images: OpenGraph, Twitter Card and schema.org microdata.
//!
//! Used only as the last rung of the escalation ladder. A renderer that has a
//! live DOM can supply these values directly; otherwise they are read from the
//! HTML document.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Image references declared in page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaImages {
    /// `<meta property="og:image">`
    pub og_image: Option<String>,
    /// `<meta name="twitter:image">`
    pub twitter_image: Option<String>,
    /// `<meta itemprop="image">`
    pub itemprop_image: Option<String>,
}

impl MetaImages {
    /// Read the first value of each metadata tag from an HTML document.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self::from_document(&document)
    }

    pub fn from_document(document: &Html) -> Self {
        Self {
            og_image: first_content(document, r#"meta[property="og:image"]"#),
            twitter_image: first_content(document, r#"meta[name="twitter:image"]"#),
            itemprop_image: first_content(document, r#"meta[itemprop="image"]"#),
        }
    }

    /// Non-empty, distinct values in `og:image`, `twitter:image`, `itemprop` order.
    pub fn candidates(&self) -> Vec<String> {
        let mut urls: Vec<String> = Vec::new();
        for value in [&self.og_image, &self.twitter_image, &self.itemprop_image]
            .into_iter()
            .flatten()
        {
            let value = value.trim();
            if value.is_empty() || urls.iter().any(|u| u == value) {
                continue;
            }
            urls.push(value.to_string());
        }
        urls
    }

    pub fn is_empty(&self) -> bool {
        self.candidates().is_empty()
    }
}

// Only the first matching element counts.
fn first_content(document: &Html, selector: &str) -> Option<String> {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return None,
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
