//! CLI binary for product_images.
//!
//! A thin shim over the library: fetch the page (or read a saved snapshot),
//! run the pipeline and print the JSON result on stdout. Logs go to stderr.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use product_images::fetch::{validate_product_url, PageFetcher};
use product_images::{extract_product_images, ExtractorConfig, PageSnapshot};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "product-images",
    version,
    about = "Extract product photo URLs from an e-commerce product page"
)]
struct Cli {
    /// Product page URL
    #[arg(env = "PRODUCT_URL")]
    url: String,

    /// Read the page from a saved HTML snapshot instead of fetching it
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// TOML file overriding keyword lists, thresholds and site profiles
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,product_images=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    let url = validate_product_url(&cli.url)?;

    let html = match &cli.html {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading HTML snapshot {}", path.display()))?,
        None => PageFetcher::new(Duration::from_secs(cli.timeout))
            .fetch_html(url.as_str())
            .context("fetching product page")?,
    };

    let page = PageSnapshot::new(cli.url.trim(), html);
    let result = extract_product_images(&page, &config);

    if result.total_count == 0 {
        tracing::warn!(url = %page.source_url, "no product images found");
    }

    let json = if cli.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}
