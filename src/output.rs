use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::product::Product;

/// Writes the whole run as one pretty-printed JSON array and reports the
/// count. This write is the run's only durable effect, and failing it is
/// the only fatal error in the system.
pub fn write_products(path: &Path, products: &[Product]) -> Result<()> {
    let json = serde_json::to_string_pretty(products).context("encoding products as JSON")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    println!(
        "Scraped {} products and saved to {}",
        products.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product {
                title: "iPhone 11".into(),
                price: 399.99,
                image_url: "https://www.magpiehq.com/developer-challenge/images/iphone-11.png"
                    .into(),
                capacity_mb: 64_000,
                color: "Black".into(),
                availability_text: "Availability: In Stock".into(),
                is_available: true,
                shipping_text: "Free Delivery".into(),
                shipping_date: None,
            },
            Product {
                title: "iPhone 11".into(),
                price: 399.99,
                image_url: "https://www.magpiehq.com/developer-challenge/images/iphone-11.png"
                    .into(),
                capacity_mb: 64_000,
                color: "White".into(),
                availability_text: "Availability: In Stock".into(),
                is_available: true,
                shipping_text: "Free Delivery".into(),
                shipping_date: None,
            },
        ]
    }

    #[test]
    fn writes_pretty_array_with_unescaped_slashes() {
        let path = std::env::temp_dir().join("magpie_scraper_output_test.json");
        write_products(&path, &sample()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(written.starts_with("[\n"));
        assert!(written.contains("\"capacityMB\": 64000"));
        assert!(written.contains("https://www.magpiehq.com/developer-challenge/images/"));
        assert!(!written.contains("\\/"));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_run_still_writes_an_array() {
        let path = std::env::temp_dir().join("magpie_scraper_empty_test.json");
        write_products(&path, &[]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, "[]");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = Path::new("/nonexistent-dir/output.json");
        let err = write_products(path, &sample()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/output.json"));
    }
}
