use std::collections::HashSet;

use chrono::{DateTime, Utc};
use product_images::extractors::{is_excluded, is_image_url};
use product_images::{extract_product_images_at, ExtractorConfig, PageSnapshot, Tier};

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

const NOISY_PAGE: &str = r#"
<html>
<head>
    <link rel="icon" href="https://www.shop.com/favicon.png">
    <meta property="og:image" content="https://www.shop.com/og/share-card.jpg">
</head>
<body>
    <header><img src="https://static.shop.com/brand/logo.svg"><img src="https://static.shop.com/brand/logo.png"></header>
    <div class="hero-banner" style="background-image:url('https://static.shop.com/banners/summer-banner.jpg')"></div>
    <div class="gallery">
        <img src="https://media.shop.com/product/packshot-default-1.jpg?w=800&amp;fmt=webp">
        <img src="https://media.shop.com/product/packshot-premium-1.jpg">
        <img src="https://media.shop.com/product/packshot-premium-1.jpg">
        <img srcset="https://media.shop.com/product/packshot-alternative-2.jpg 1x, https://media.shop.com/product/thumb-2.jpg 2x">
        <img src="https://media.shop.com/PRODUCT/hero-main.webp">
    </div>
    <script>window.__DATA__ = {"images":["https://media.shop.com/product/zoom-3.avif"]}</script>
    <footer><img src="https://static.shop.com/social/facebook.png"><img src="https://static.shop.com/social/instagram.png"></footer>
</body>
</html>
"#;

#[test]
fn test_premium_packshot_scenario() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new(
        "https://www.site.com/p/123",
        r#"<img src="https://cdn.site.com/packshot-premium-1_w_1600.jpg">
           <img src="https://cdn.site.com/logo-icon.png">"#,
    );

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(result.tier, Tier::Keyword);
    assert_eq!(
        result.all_images,
        vec!["https://cdn.site.com/packshot-premium-1_w_1600.jpg"]
    );
    assert_eq!(result.groups.premium, result.all_images);
    assert_eq!(
        result.main_image.as_deref(),
        Some("https://cdn.site.com/packshot-premium-1_w_1600.jpg")
    );
    assert_eq!(result.total_count, 1);
    // Carries a w_1600 token, so it is not a high-res pick.
    assert!(result.recommended_high_res.is_empty());
}

#[test]
fn test_size_fallback_scenario() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new(
        "https://www.site.com/p/123",
        r#"<img src="https://cdn.site.com/assets/1920x1080.jpg">
           <img src="https://cdn.site.com/assets/pic.png?w=100">"#,
    );

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(result.tier, Tier::SizeFallback);
    assert!(result.low_confidence);
    assert_eq!(result.all_images, vec!["https://cdn.site.com/assets/1920x1080.jpg"]);
    assert_eq!(
        result.main_image.as_deref(),
        Some("https://cdn.site.com/assets/1920x1080.jpg")
    );
}

#[test]
fn test_meta_tag_scenario() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new(
        "https://www.site.com/p/123",
        r#"<html><head><meta property="og:image" content="https://x.com/a.jpg"></head><body></body></html>"#,
    );

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(result.tier, Tier::MetaTag);
    assert_eq!(result.total_count, 1);
    assert_eq!(result.main_image.as_deref(), Some("https://x.com/a.jpg"));
    assert!(!result.low_confidence);
}

#[test]
fn test_named_site_scenario() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new(
        "https://www.chanel.com/us/fashion/p/AS1234/bag/",
        r#"
        <img src="https://www.chanel.com/images/w_3200/look-1234567890123.jpg">
        <img src="https://www.chanel.com/images/w_1600/look-1234567890123.jpg">
        <img src="https://www.chanel.com/images/w_3200/bag-9543169179678.jpg">
        <img src="https://www.chanel.com/images/w_1600/bag-9543169179678.jpg">
        "#,
    );

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(result.strategy, "Chanel");
    assert_eq!(
        result.all_images,
        vec![
            "https://www.chanel.com/images/w_1600/bag-9543169179678.jpg",
            "https://www.chanel.com/images/w_1600/look-1234567890123.jpg",
        ]
    );
    assert_eq!(
        result.main_image.as_deref(),
        Some("https://www.chanel.com/images/w_1600/bag-9543169179678.jpg")
    );
}

#[test]
fn test_named_site_main_image_follows_site_order() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new(
        "https://www.chanel.com/us/fashion/p/AS1234/bag/",
        r#"
        <img src="https://www.chanel.com/images/w_1600/main-look-1234567890123.jpg">
        <img src="https://www.chanel.com/images/w_1600/bag-9543169179678.jpg">
        "#,
    );

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(
        result.all_images,
        vec![
            "https://www.chanel.com/images/w_1600/bag-9543169179678.jpg",
            "https://www.chanel.com/images/w_1600/main-look-1234567890123.jpg",
        ]
    );
    assert_eq!(
        result.groups.hero,
        vec!["https://www.chanel.com/images/w_1600/main-look-1234567890123.jpg"]
    );
    assert_eq!(
        result.main_image.as_deref(),
        Some("https://www.chanel.com/images/w_1600/bag-9543169179678.jpg")
    );
}

#[test]
fn test_noisy_page_ranking() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new("https://www.shop.com/p/1", NOISY_PAGE);

    let result = extract_product_images_at(&page, &config, fixed_time());

    assert_eq!(result.tier, Tier::Keyword);
    assert_eq!(
        result.all_images,
        vec![
            "https://media.shop.com/PRODUCT/hero-main.webp",
            "https://media.shop.com/product/packshot-premium-1.jpg",
            "https://media.shop.com/product/packshot-default-1.jpg?w=800&fmt=webp",
            "https://media.shop.com/product/packshot-alternative-2.jpg",
            "https://media.shop.com/product/zoom-3.avif",
        ]
    );
    assert_eq!(
        result.main_image.as_deref(),
        Some("https://media.shop.com/PRODUCT/hero-main.webp")
    );
    assert_eq!(result.groups.hero.len(), 1);
    assert_eq!(result.groups.other, vec!["https://media.shop.com/product/zoom-3.avif"]);
    assert_eq!(
        result.recommended_high_res,
        vec![
            "https://media.shop.com/PRODUCT/hero-main.webp",
            "https://media.shop.com/product/packshot-premium-1.jpg",
            "https://media.shop.com/product/packshot-default-1.jpg?w=800&fmt=webp",
        ]
    );
}

#[test]
fn test_result_invariants() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new("https://www.shop.com/p/1", NOISY_PAGE);
    let result = extract_product_images_at(&page, &config, fixed_time());

    let unique: HashSet<&String> = result.all_images.iter().collect();
    assert_eq!(unique.len(), result.all_images.len());
    assert_eq!(result.total_count, result.all_images.len());

    for url in &result.all_images {
        assert!(is_image_url(url), "{url} is not an image URL");
        assert!(!is_excluded(url, &config), "{url} contains an exclude keyword");
    }

    let main = result.main_image.as_ref().unwrap();
    assert!(result.all_images.contains(main));
    assert!(result.recommended_high_res.len() <= 3);
}

#[test]
fn test_keyword_match_skips_metadata() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new("https://www.shop.com/p/1", NOISY_PAGE);
    let result = extract_product_images_at(&page, &config, fixed_time());

    assert!(!result
        .all_images
        .iter()
        .any(|url| url.contains("share-card")));
}

#[test]
fn test_idempotent() {
    let config = ExtractorConfig::default();
    let page = PageSnapshot::new("https://www.shop.com/p/1", NOISY_PAGE);

    let first = extract_product_images_at(&page, &config, fixed_time());
    let second = extract_product_images_at(&page, &config, fixed_time());
    assert_eq!(first, second);
}

#[test]
fn test_malformed_input_yields_empty_result() {
    let config = ExtractorConfig::default();
    for html in ["", "<<<>>>&&&", "<meta property=\"og:image\" content=\"", "https://"] {
        let page = PageSnapshot::new("not a url", html);
        let result = extract_product_images_at(&page, &config, fixed_time());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.tier, Tier::None);
        assert!(result.main_image.is_none());
        assert_eq!(result.strategy, "generic");
    }
}
