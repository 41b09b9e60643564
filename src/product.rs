use serde::Serialize;

/// One product variant as it lands in the output dataset.
///
/// A listing block with three colour swatches yields three of these,
/// identical except for `color`. Field order here is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub price: f64,
    pub image_url: String,
    #[serde(rename = "capacityMB")]
    pub capacity_mb: u64,
    pub color: String,
    pub availability_text: String,
    pub is_available: bool,
    pub shipping_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_date: Option<String>,
}

impl Product {
    /// Short human-readable tag for progress lines: `title (color, NMB)`.
    pub fn label(&self) -> String {
        format!("{} ({}, {}MB)", self.title, self.color, self.capacity_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            title: "iPhone 14 Pro".into(),
            price: 1099.99,
            image_url: "https://www.magpiehq.com/developer-challenge/images/iphone-14-pro.png"
                .into(),
            capacity_mb: 256000,
            color: "Gold".into(),
            availability_text: "Availability: In Stock".into(),
            is_available: true,
            shipping_text: "Delivery from 25th August".into(),
            shipping_date: Some("2026-08-25".into()),
        }
    }

    #[test]
    fn json_keys_are_camel_case_with_capacity_mb_exception() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"capacityMB\":256000"));
        assert!(json.contains("\"availabilityText\""));
        assert!(json.contains("\"isAvailable\":true"));
        assert!(json.contains("\"shippingText\""));
        assert!(json.contains("\"shippingDate\":\"2026-08-25\""));
        assert!(!json.contains("capacityMb"));
    }

    #[test]
    fn shipping_date_key_absent_when_unparsed() {
        let mut p = sample();
        p.shipping_date = None;
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("shippingDate"));
    }

    #[test]
    fn forward_slashes_stay_unescaped() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("https://www.magpiehq.com/developer-challenge/images/"));
        assert!(!json.contains("\\/"));
    }

    #[test]
    fn label_shape() {
        assert_eq!(sample().label(), "iPhone 14 Pro (Gold, 256000MB)");
    }
}
