use reqwest::Client;
use rust_decimal::Decimal;

use super::module_size::parse_module_size;
use super::{Listing, sort_listings};

/// The category page embeds its product data as a JSON-ish blob inside
/// this hidden div.
const IMPRESSIONS_MARKER: &str = r#"<div id="productImpressions" class="hidden">"#;

/// Parse the product impressions embedded in a Micro Center category page.
///
/// The blob is a comma-separated run of single-quoted objects; wrapping it
/// in brackets and swapping quote styles turns it into a JSON array.
/// Products without a recognizable module size are skipped. A page without
/// the impressions div yields an empty list, not an error.
pub fn parse_micro_center(
    source: &str,
) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
    let Some(start) = source.find(IMPRESSIONS_MARKER) else {
        return Ok(Vec::new());
    };
    let body_start = start + IMPRESSIONS_MARKER.len();
    let Some(len) = source[body_start..].find("</div>") else {
        return Ok(Vec::new());
    };

    let json = format!("[{}]", source[body_start..body_start + len].replace('\'', "\""));
    let products: Vec<serde_json::Value> = serde_json::from_str(&json)?;

    let mut listings = Vec::new();
    for product in &products {
        let Some(name) = product.get("name").and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(size) = parse_module_size(name) else {
            continue;
        };
        let Some(price_text) = product.get("price").and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(brand) = product.get("brand").and_then(|v| v.as_str()) else {
            continue;
        };
        let price: Decimal = price_text.replace(',', "").parse()?;
        listings.push(Listing {
            price,
            description: format!("{}GB@${} {}", size, price_text, brand),
        });
    }

    sort_listings(&mut listings);
    tracing::debug!(listings = listings.len(), "parsed micro center page");
    Ok(listings)
}

/// Fetches Micro Center category pages and extracts their RAM listings.
pub struct MicroCenterScraper {
    client: Client,
}

impl MicroCenterScraper {
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
        parse_micro_center(&body)
    }
}

impl Default for MicroCenterScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_markerless_page_yields_nothing() {
        for source in ["", "foobar", "<div>no impressions here</div>"] {
            assert!(parse_micro_center(source).unwrap().is_empty());
        }
    }

    #[test]
    fn test_parses_and_sorts_impressions() {
        let listings = parse_micro_center(
            r#"
<div id="productImpressions" class="hidden">{
'name': 'Foobar 4GB',
'brand': 'Foobar',
'price': '14.99'}, {
'name': 'Foobar 8GB (2 x 4GB)',
'brand': 'Foobar',
'price': '24.99'}, {
'name': 'Foobar 8GB',
'brand': 'Foobar',
'price': '18.99'}, {
'name': 'Foobar 16GB (2 x 8GB)',
'brand': 'Foobar',
'price': '28.99'}
</div>
"#,
        )
        .unwrap();

        assert_eq!(
            listings,
            vec![
                Listing {
                    price: dec!(14.99),
                    description: "4GB@$14.99 Foobar".to_string()
                },
                Listing {
                    price: dec!(18.99),
                    description: "8GB@$18.99 Foobar".to_string()
                },
                Listing {
                    price: dec!(24.99),
                    description: "2x4GB@$24.99 Foobar".to_string()
                },
                Listing {
                    price: dec!(28.99),
                    description: "2x8GB@$28.99 Foobar".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_sizeless_products_are_skipped() {
        let listings = parse_micro_center(
            r#"<div id="productImpressions" class="hidden">{
'name': 'Foobar power supply',
'brand': 'Foobar',
'price': '59.99'}</div>"#,
        )
        .unwrap();
        assert!(listings.is_empty());
    }
}
