use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;

use super::module_size::parse_module_size;
use super::{Listing, sort_listings};

/// Feed titles open with the HTML-escaped dollar sign.
const ESCAPED_DOLLAR: &str = "&#36;";

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"<title>([^<]*)</title>").unwrap();
}

/// Parse the deal titles out of a Newegg RSS feed.
///
/// Only titles of the form `&#36;<price> - <brand> <product name>` count;
/// the first whitespace-delimited word after the separator is the brand,
/// and the product name must carry a module size. Everything else in the
/// feed is skipped.
pub fn parse_newegg(
    source: &str,
) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
    let mut listings = Vec::new();

    for cap in TITLE_RE.captures_iter(source) {
        let Some(title) = cap[1].trim().strip_prefix(ESCAPED_DOLLAR) else {
            continue;
        };
        let Some(size) = parse_module_size(title) else {
            continue;
        };
        let Some(separator) = title.find(" - ") else {
            continue;
        };
        let price_text = &title[..separator];
        let brand = title[separator + 3..]
            .split_whitespace()
            .next()
            .unwrap_or("");
        let price: Decimal = price_text.replace(',', "").parse()?;
        listings.push(Listing {
            price,
            description: format!("{}GB@${} {}", size, price_text, brand),
        });
    }

    sort_listings(&mut listings);
    tracing::debug!(listings = listings.len(), "parsed newegg feed");
    Ok(listings)
}

/// Fetches Newegg RSS feeds and extracts their RAM listings.
pub struct NeweggScraper {
    client: Client,
}

impl NeweggScraper {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .unwrap();

        Self { client }
    }

    pub async fn fetch(
        &self,
        url: &str,
    ) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_newegg(&body)
    }
}

impl Default for NeweggScraper {
    fn default() -> Self {
        Self::new()
    }
}
