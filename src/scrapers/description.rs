use std::fmt;

/// Anything shorter cannot hold a size, the price marker, and a price.
const MIN_TOKEN_LEN: usize = 10;

/// Separates the module size from the dollar amount in a description token.
const SIZE_PRICE_MARKER: &str = "gb@$";

/// Raw fields decoded from one description token, before validation.
///
/// Numeric substrings that fail to parse come back as values the record
/// constructor rejects as range violations (`-1` for the integers,
/// `NaN` for the price) instead of being silently dropped. A `size` of `0`
/// is the one benign outcome: it marks a token with no usable price.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub count: i64,
    pub size: i64,
    pub price: f64,
    pub brand: String,
}

/// Error types for description decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    InvalidFormat { input: String },
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionError::InvalidFormat { input } => {
                write!(f, "invalid description format: {:?}", input)
            }
        }
    }
}

impl std::error::Error for DescriptionError {}

/// Decode a trimmed, lowercased token like `2x8gb@$45.99 crucial`.
///
/// Positional scan, not a grammar: the first `x` bounds the count, the
/// first space starts the brand, and `gb@$` between them separates size
/// from price. The `<count>x` prefix defaults to a count of one; without a
/// space there is no brand and size/price stay zero; without the marker
/// after the `x`, size/price stay zero.
pub fn decode(description: &str) -> Result<Decoded, DescriptionError> {
    if description.len() < MIN_TOKEN_LEN {
        return Err(DescriptionError::InvalidFormat {
            input: description.to_string(),
        });
    }

    let x_pos = description.find('x');
    let space_pos = description.find(' ').filter(|&s| s > 0);
    let marker_pos = description.find(SIZE_PRICE_MARKER).filter(|&m| m > 0);

    let count = match x_pos {
        None | Some(0) => 1,
        Some(x) => description[..x].parse().unwrap_or(-1),
    };

    let mut size = 0;
    let mut price = 0.0;
    let mut brand = String::new();

    if let Some(space) = space_pos {
        brand = description[space + 1..].to_string();

        let size_start = x_pos.map(|x| x + 1).unwrap_or(0);
        if let Some(marker) = marker_pos.filter(|&m| m >= size_start) {
            size = description[size_start..marker].parse().unwrap_or(-1);
            let price_start = marker + SIZE_PRICE_MARKER.len();
            price = if price_start <= space {
                description[price_start..space].parse().unwrap_or(f64::NAN)
            } else {
                f64::NAN
            };
        }
    }

    Ok(Decoded {
        count,
        size,
        price,
        brand,
    })
}
