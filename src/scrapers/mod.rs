pub mod description;
pub mod document;
pub mod micro_center;
pub mod module_size;
pub mod newegg;

use rust_decimal::Decimal;

/// Category whitelists the document parser classifies headers against.
///
/// Injected rather than ambient so tests and future documents can swap the
/// sets without touching the parser.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub dimm_types: Vec<String>,
    pub stores: Vec<String>,
}

impl Catalog {
    pub fn is_dimm_type(&self, name: &str) -> bool {
        self.dimm_types.iter().any(|t| t == name)
    }

    pub fn is_store(&self, name: &str) -> bool {
        self.stores.iter().any(|s| s == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            dimm_types: vec!["desktop".to_string(), "laptop".to_string()],
            stores: vec![
                "best buy".to_string(),
                "micro center".to_string(),
                "newegg".to_string(),
            ],
        }
    }
}

/// One retail listing scraped from a store page, rendered as a shorthand
/// description line ready for a price document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub price: Decimal,
    pub description: String,
}

/// Cheapest first; ties broken by description text so output is stable.
pub(crate) fn sort_listings(listings: &mut [Listing]) {
    listings.sort_by(|a, b| {
        a.price
            .cmp(&b.price)
            .then_with(|| a.description.cmp(&b.description))
    });
}

/// Render listings as paste-ready document lines under a store header,
/// indented to sit below a date and module-type header. Empty input
/// renders nothing at all, header included.
pub fn render_document_lines(store: &str, listings: &[Listing]) -> String {
    if listings.is_empty() {
        return String::new();
    }
    let mut out = format!("        {}:\n", store);
    for listing in listings {
        out.push_str("        - ");
        out.push_str(&listing.description);
        out.push('\n');
    }
    out
}
