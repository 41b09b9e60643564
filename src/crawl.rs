use scraper::Html;
use tracing::{info, warn};

use crate::dedup::SeenProducts;
use crate::extract;
use crate::fetch::PageSource;
use crate::normalize::ImageResolver;
use crate::product::Product;
use crate::selectors;

/// Knobs for one crawl run.
pub struct CrawlOptions {
    pub base_url: String,
    pub strict_image_urls: bool,
}

/// Why the page loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A page came back without listing blocks.
    NoMoreListings,
    /// A page could not be fetched; earlier pages' results are kept.
    FetchFailed,
}

/// Outcome of one crawl run.
pub struct CrawlReport {
    /// Deduplicated products in discovery order.
    pub products: Vec<Product>,
    /// Pages that contributed listings.
    pub pages: u32,
    pub duplicates: usize,
    pub skipped_blocks: usize,
    pub stop: StopReason,
}

/// Crawls the catalog from page 1 until a page comes back empty or a
/// fetch fails. All run state lives here and comes back in the report.
pub fn run<S: PageSource>(source: &S, opts: &CrawlOptions) -> CrawlReport {
    let images = ImageResolver::new(&opts.base_url, opts.strict_image_urls);
    let mut products: Vec<Product> = Vec::new();
    let mut seen = SeenProducts::new();
    let mut duplicates = 0usize;
    let mut skipped_blocks = 0usize;
    let mut pages = 0u32;

    let mut page = 1u32;
    let stop = loop {
        let url = source.listing_url(page);
        println!("Scraping page {}: {}", page, url);

        let body = match source.fetch_listing(page) {
            Ok(body) => body,
            Err(e) => {
                println!("Error scraping page {}: {:#}", page, e);
                warn!("Fetch failed on page {}: {:#}", page, e);
                break StopReason::FetchFailed;
            }
        };

        let document = Html::parse_document(&body);
        let blocks: Vec<_> = document.select(&selectors::LISTING).collect();
        println!("Found {} products on page {}", blocks.len(), page);

        if blocks.is_empty() {
            break StopReason::NoMoreListings;
        }
        pages += 1;

        for block in blocks {
            match extract::extract_block(block, &images) {
                Ok(candidates) => {
                    for candidate in candidates {
                        if seen.accept(&candidate) {
                            println!("Added product: {}", candidate.label());
                            products.push(candidate);
                        } else {
                            println!("Skipped duplicate: {}", candidate.label());
                            duplicates += 1;
                        }
                    }
                }
                Err(e) => {
                    println!("Error processing product: {}", e);
                    warn!("Skipping listing block on page {}: {}", page, e);
                    skipped_blocks += 1;
                }
            }
        }

        page += 1;
    };

    info!(
        "Crawl finished: {} products from {} pages ({} duplicates, {} skipped blocks)",
        products.len(),
        pages,
        duplicates,
        skipped_blocks
    );

    CrawlReport {
        products,
        pages,
        duplicates,
        skipped_blocks,
        stop,
    }
}
