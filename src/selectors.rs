//! CSS selectors for the smartphone catalog markup.
//!
//! Every selector the crate uses lives here, so a markup change on the
//! site means updating this file and its fixtures, nothing else.

use std::sync::LazyLock;

use scraper::Selector;

/// One listing block per catalog entry.
pub static LISTING: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".product").unwrap());

/// Product name inside the block heading.
pub static NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 .product-name").unwrap());

/// Capacity label inside the block heading.
pub static CAPACITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 .product-capacity").unwrap());

/// Price line.
pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.my-8").unwrap());

/// Product image.
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Availability and shipping lines share this class; the "Availability:"
/// marker tells them apart, and the first line of each kind wins.
pub static INFO: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.my-4").unwrap());

/// Colour swatches.
pub static COLOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span[data-colour]").unwrap());

/// Attribute carrying the colour name on a swatch.
pub static COLOR_ATTR: &str = "data-colour";
