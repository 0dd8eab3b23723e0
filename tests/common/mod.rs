use ramtrack::models::book::PriceBook;
use ramtrack::scrapers::Catalog;
use ramtrack::scrapers::document::DocumentParser;

/// A small but representative document: two dates, both module types, all
/// three stores, kit listings, a priceless line that must be skipped, and
/// the loose indentation the format allows.
pub const SAMPLE_DOCUMENT: &str = "\
2020-01-20:
  desktop:
    best buy:
      - 8gb@$24.00 corsair
      - 16gb@$52.00 corsair
    micro center:
      - 2x8gb@$44.00 crucial
    newegg:
      - 8gb@$22.50 corsair
      - 8gb@$22.50
  laptop:
    newegg:
      - 8gb@$20.00 kingston
2020-01-27:
  desktop:
    newegg:
      - 8gb@$21.00 corsair
      - 1x16gb@$89.99 gskill
  laptop:
    micro center:
      - 2x4gb@$25.00 crucial
";

pub fn parse_sample() -> PriceBook {
    DocumentParser::new(Catalog::default())
        .parse(SAMPLE_DOCUMENT)
        .expect("sample document should parse")
}
