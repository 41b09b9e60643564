mod crawl;
mod dedup;
mod extract;
mod fetch;
mod normalize;
mod output;
mod product;
mod selectors;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::crawl::{CrawlOptions, StopReason};
use crate::fetch::HttpSource;

const DEFAULT_BASE_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones";

#[derive(Parser)]
#[command(name = "magpie_scraper", about = "Smartphone catalog scraper")]
struct Cli {
    /// Catalog listing URL to crawl
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Where to write the scraped products
    #[arg(long, default_value = "output.json")]
    out: PathBuf,
    /// Resolve image URLs per RFC 3986 instead of the site's legacy rules
    #[arg(long)]
    strict_image_urls: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_string();

    let source = HttpSource::new(&base_url)?;
    let opts = CrawlOptions {
        base_url,
        strict_image_urls: cli.strict_image_urls,
    };

    let report = crawl::run(&source, &opts);
    output::write_products(&cli.out, &report.products)?;

    println!(
        "Done: {} pages, {} duplicates skipped, {} blocks unreadable.",
        report.pages, report.duplicates, report.skipped_blocks
    );
    if report.stop == StopReason::FetchFailed {
        println!("Stopped early on a fetch error; output may be partial.");
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
