use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use url::Url;

static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(TB|GB)").unwrap());
static NON_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());
static DECIMAL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.?\d*|\.\d+)").unwrap());
static SHIPPING_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)\s+([A-Za-z]+)").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces and trim, the way the text
/// reads on screen.
pub fn clean_text(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").trim().to_string()
}

/// Storage capacity in megabytes from a label like "256GB" or "1 TB".
/// No recognisable unit means 0.
pub fn capacity_mb(text: &str) -> u64 {
    let Some(caps) = CAPACITY_RE.captures(text) else {
        return 0;
    };
    let value: u64 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    if caps[2].eq_ignore_ascii_case("TB") {
        value.saturating_mul(1_000_000)
    } else {
        value.saturating_mul(1_000)
    }
}

/// Decimal price from a free-form price line.
///
/// Strips every character that is not a digit or period, then reads the
/// longest leading decimal the remainder starts with. Trailing junk from
/// stripped suffixes ("£1,099.99 inc. VAT" leaves "1099.99." behind) is
/// ignored; no digits at all means 0.0.
pub fn price(text: &str) -> f64 {
    let stripped = NON_PRICE_RE.replace_all(text, "");
    DECIMAL_PREFIX_RE
        .find(&stripped)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Whether the availability line announces stock.
pub fn in_stock(availability_text: &str) -> bool {
    availability_text.contains("In Stock")
}

/// ISO dispatch date from shipping text like "Available for dispatch
/// from 21st March", assuming the current calendar year.
pub fn shipping_date(text: &str) -> Option<String> {
    shipping_date_in_year(text, chrono::Local::now().year())
}

/// Same as [`shipping_date`] with an explicit year.
///
/// Full and abbreviated month names both parse; an impossible
/// day/month combination yields `None`.
pub fn shipping_date_in_year(text: &str, year: i32) -> Option<String> {
    let caps = SHIPPING_DAY_RE.captures(text)?;
    let composed = format!("{} {} {}", &caps[1], &caps[2], year);
    NaiveDate::parse_from_str(&composed, "%d %B %Y")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// The listing URL truncated one path segment up, trailing slash kept.
/// `.../developer-challenge/smartphones` becomes `.../developer-challenge/`.
pub fn catalog_root(listing_url: &str) -> String {
    let trimmed = listing_url.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => format!("{}/", trimmed),
    }
}

/// Resolves listing image `src` values to absolute URLs.
///
/// Compat mode reproduces the site's historical quirk: `../` is stripped
/// without ascending, so parent-relative and rooted paths both land under
/// the catalog root. Strict mode does real RFC 3986 resolution against
/// the listing URL instead.
pub struct ImageResolver {
    listing_url: String,
    catalog_root: String,
    strict: bool,
}

impl ImageResolver {
    pub fn new(listing_url: &str, strict: bool) -> Self {
        Self {
            listing_url: listing_url.to_string(),
            catalog_root: catalog_root(listing_url),
            strict,
        }
    }

    pub fn resolve(&self, src: &str) -> String {
        if src.starts_with("http") {
            return src.to_string();
        }
        if self.strict {
            if let Ok(base) = Url::parse(&self.listing_url) {
                if let Ok(resolved) = base.join(src) {
                    return resolved.to_string();
                }
            }
            // unparseable input falls back to the compat rules
        }
        if let Some(rest) = src.strip_prefix("../") {
            format!("{}{}", self.catalog_root, rest)
        } else {
            format!("{}{}", self.catalog_root, src.trim_start_matches('/'))
        }
    }
}
