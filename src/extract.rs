use scraper::{ElementRef, Selector};
use thiserror::Error;

use crate::normalize::{self, ImageResolver};
use crate::product::Product;
use crate::selectors;

/// A listing block the extractor cannot read at all. The caller skips
/// the block and moves on to its siblings.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("missing attribute: {0}")]
    MissingAttr(&'static str),
}

/// Extracts every colour variant a listing block declares.
///
/// Mandatory per block: name, capacity label, price line, image. A block
/// without swatches yields an empty vec, which is not an error.
pub fn extract_block(
    block: ElementRef<'_>,
    images: &ImageResolver,
) -> Result<Vec<Product>, ExtractError> {
    let title = select_text(block, &selectors::NAME, "h3 .product-name")?;
    let capacity_text = select_text(block, &selectors::CAPACITY, "h3 .product-capacity")?;
    let capacity_mb = normalize::capacity_mb(&capacity_text);

    let price_text = select_text(block, &selectors::PRICE, "div.my-8")?;
    let price = normalize::price(&price_text);

    let src = block
        .select(&selectors::IMAGE)
        .next()
        .ok_or(ExtractError::MissingElement("img"))?
        .value()
        .attr("src")
        .ok_or(ExtractError::MissingAttr("img[src]"))?;
    let image_url = images.resolve(src);

    let (availability_text, shipping_text) = info_texts(block);
    let is_available = normalize::in_stock(&availability_text);
    let shipping_date = normalize::shipping_date(&shipping_text);

    let products = block
        .select(&selectors::COLOR)
        .filter_map(|swatch| swatch.value().attr(selectors::COLOR_ATTR))
        .map(|color| Product {
            title: title.clone(),
            price,
            image_url: image_url.clone(),
            capacity_mb,
            color: color.to_string(),
            availability_text: availability_text.clone(),
            is_available,
            shipping_text: shipping_text.clone(),
            shipping_date: shipping_date.clone(),
        })
        .collect();

    Ok(products)
}

/// Availability and shipping share one CSS class; document order and the
/// "Availability:" marker tell them apart. First non-empty line of each
/// kind wins, later ones are ignored.
fn info_texts(block: ElementRef<'_>) -> (String, String) {
    let mut availability = String::new();
    let mut shipping = String::new();

    for div in block.select(&selectors::INFO) {
        let text = normalize::clean_text(&div.text().collect::<String>());
        if text.is_empty() {
            continue;
        }
        if text.contains("Availability:") {
            if availability.is_empty() {
                availability = text;
            }
        } else if shipping.is_empty() {
            shipping = text;
        }
    }

    (availability, shipping)
}

fn select_text(
    block: ElementRef<'_>,
    selector: &Selector,
    name: &'static str,
) -> Result<String, ExtractError> {
    let el = block
        .select(selector)
        .next()
        .ok_or(ExtractError::MissingElement(name))?;
    Ok(normalize::clean_text(&el.text().collect::<String>()))
}
