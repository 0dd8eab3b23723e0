use chrono::NaiveDate;
use std::fmt;

/// Categories shorter than this cannot name a real DIMM type or store
/// ("laptop" and "newegg" are the six-character floor).
const MIN_CATEGORY_LEN: usize = 6;

/// Error types for record validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field was missing or carried the wrong kind of value.
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    /// A field carried the right kind of value, outside its allowed range.
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::TypeMismatch { field, expected } => {
                write!(f, "type mismatch: {} must be {}", field, expected)
            }
            RecordError::OutOfRange { field, expected } => {
                write!(f, "out of range: {} must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for RecordError {}

/// One observed price: `count` modules of `size` GB sold together for
/// `price` dollars at `store` on `date`.
///
/// Only [`PriceRecord::new`] can build one, so every record in circulation
/// has passed validation and carries trimmed, lowercased category strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    date: NaiveDate,
    dimm_type: String,
    store: String,
    count: i64,
    size: i64,
    price: f64,
    brand: String,
}

impl PriceRecord {
    /// Validate and normalize the raw fields into a record.
    ///
    /// The `Option` fields are the parser's running context; `None` means the
    /// corresponding header was never seen and fails as a type mismatch.
    /// Checks run in field order so the first offending field is reported.
    pub fn new(
        date: Option<NaiveDate>,
        dimm_type: Option<&str>,
        store: Option<&str>,
        count: i64,
        size: i64,
        price: f64,
        brand: &str,
    ) -> Result<Self, RecordError> {
        let date = date.ok_or(RecordError::TypeMismatch {
            field: "date",
            expected: "a calendar date",
        })?;

        let dimm_type = dimm_type
            .ok_or(RecordError::TypeMismatch {
                field: "dimm_type",
                expected: "a module type string",
            })?
            .trim()
            .to_lowercase();
        if dimm_type.len() < MIN_CATEGORY_LEN {
            return Err(RecordError::OutOfRange {
                field: "dimm_type",
                expected: "at least six characters",
            });
        }

        let store = store
            .ok_or(RecordError::TypeMismatch {
                field: "store",
                expected: "a store name string",
            })?
            .trim()
            .to_lowercase();
        if store.len() < MIN_CATEGORY_LEN {
            return Err(RecordError::OutOfRange {
                field: "store",
                expected: "at least six characters",
            });
        }

        if count <= 0 {
            return Err(RecordError::OutOfRange {
                field: "count",
                expected: "a positive integer",
            });
        }
        if size <= 0 {
            return Err(RecordError::OutOfRange {
                field: "size",
                expected: "a positive integer",
            });
        }
        // NaN fails this comparison too, so an unparseable price never slips in.
        if !(price > 0.0) {
            return Err(RecordError::OutOfRange {
                field: "price",
                expected: "a positive number",
            });
        }

        let brand = brand.trim().to_lowercase();
        if brand.is_empty() {
            return Err(RecordError::OutOfRange {
                field: "brand",
                expected: "a non-empty string",
            });
        }

        Ok(Self {
            date,
            dimm_type,
            store,
            count,
            size,
            price,
            brand,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn dimm_type(&self) -> &str {
        &self.dimm_type
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Total GB across all modules in the observation.
    pub fn total_size(&self) -> i64 {
        self.count * self.size
    }

    pub fn price_per_module(&self) -> f64 {
        self.price / self.count as f64
    }

    pub fn price_per_gb(&self) -> f64 {
        self.price / self.total_size() as f64
    }
}

impl fmt::Display for PriceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}GB@${} {} for {} from {} on {}",
            self.count, self.size, self.price, self.brand, self.dimm_type, self.store, self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2020, 1, 20)
    }

    fn build(count: i64, size: i64, price: f64, brand: &str) -> Result<PriceRecord, RecordError> {
        PriceRecord::new(
            some_date(),
            Some("desktop"),
            Some("newegg"),
            count,
            size,
            price,
            brand,
        )
    }

    #[test]
    fn test_valid_record_and_derived_values() {
        let record = build(2, 8, 45.99, "crucial").unwrap();
        assert_eq!(record.total_size(), 16);
        assert_eq!(record.price_per_module(), 45.99 / 2.0);
        assert_eq!(record.price_per_gb(), 45.99 / 16.0);
    }

    #[test]
    fn test_normalizes_category_strings() {
        let record = PriceRecord::new(
            some_date(),
            Some("  Desktop "),
            Some(" Micro Center "),
            1,
            16,
            89.99,
            " G.Skill ",
        )
        .unwrap();
        assert_eq!(record.dimm_type(), "desktop");
        assert_eq!(record.store(), "micro center");
        assert_eq!(record.brand(), "g.skill");
    }

    #[test]
    fn test_missing_context_is_type_mismatch() {
        let err = PriceRecord::new(None, Some("desktop"), Some("newegg"), 1, 8, 19.99, "foo")
            .unwrap_err();
        assert!(matches!(err, RecordError::TypeMismatch { field: "date", .. }));

        let err = PriceRecord::new(some_date(), None, Some("newegg"), 1, 8, 19.99, "foo")
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::TypeMismatch {
                field: "dimm_type",
                ..
            }
        ));

        let err =
            PriceRecord::new(some_date(), Some("desktop"), None, 1, 8, 19.99, "foo").unwrap_err();
        assert!(matches!(err, RecordError::TypeMismatch { field: "store", .. }));
    }

    #[test]
    fn test_short_categories_are_out_of_range() {
        let err = PriceRecord::new(some_date(), Some("ddr"), Some("newegg"), 1, 8, 19.99, "foo")
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::OutOfRange {
                field: "dimm_type",
                ..
            }
        ));

        let err = PriceRecord::new(some_date(), Some("desktop"), Some("bb"), 1, 8, 19.99, "foo")
            .unwrap_err();
        assert!(matches!(err, RecordError::OutOfRange { field: "store", .. }));
    }

    #[test]
    fn test_nonpositive_numbers_are_out_of_range() {
        for count in [-1, 0] {
            let err = build(count, 8, 19.99, "foo").unwrap_err();
            assert!(matches!(err, RecordError::OutOfRange { field: "count", .. }));
        }
        for size in [-1, 0] {
            let err = build(1, size, 19.99, "foo").unwrap_err();
            assert!(matches!(err, RecordError::OutOfRange { field: "size", .. }));
        }
        for price in [-1.0, 0.0, f64::NAN] {
            let err = build(1, 8, price, "foo").unwrap_err();
            assert!(matches!(err, RecordError::OutOfRange { field: "price", .. }));
        }
    }

    #[test]
    fn test_blank_brand_is_out_of_range() {
        let err = build(1, 8, 19.99, "   ").unwrap_err();
        assert!(matches!(err, RecordError::OutOfRange { field: "brand", .. }));
    }

    #[test]
    fn test_display_round_trips_the_shorthand() {
        let record = build(2, 8, 45.99, "crucial").unwrap();
        assert_eq!(
            record.to_string(),
            "2x8GB@$45.99 crucial for desktop from newegg on 2020-01-20"
        );
    }
}
