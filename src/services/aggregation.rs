//! Summary series over a parsed price book.
//!
//! Two independent views feed the charting frontend:
//! - an overall price-per-GB table, one column per store × module-type pair
//! - a min/average/max price-per-module table for one module type and size
//!
//! Both walk the book's dates ascending and emit one row per date.

use crate::models::book::PriceBook;
use crate::models::record::PriceRecord;
use crate::models::series::{Column, DataTable, Row};
use crate::scrapers::Catalog;

/// How a date with no matching records shows up in a series.
///
/// `Zero` keeps the historical convention of charting empty groups as `0`;
/// `Null` emits JSON `null` so plotting libraries can show a gap instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    #[default]
    Zero,
    Null,
}

impl EmptyPolicy {
    fn empty_cell(self) -> Option<f64> {
        match self {
            EmptyPolicy::Zero => Some(0.0),
            EmptyPolicy::Null => None,
        }
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Average price per GB for every (store, module type) pair, per date.
///
/// Stores iterate outer and module types inner, so the column order is
/// `store₁ type₁, store₁ type₂, store₂ type₁, …` for the injected catalog.
pub fn overall_series(book: &PriceBook, catalog: &Catalog, policy: EmptyPolicy) -> DataTable {
    let mut columns = vec![Column::date("date")];
    for store in &catalog.stores {
        for dimm_type in &catalog.dimm_types {
            columns.push(Column::number(&format!("{} {}", store, dimm_type)));
        }
    }

    let rows = book
        .dates()
        .map(|date| {
            let records = book.records_on(date);
            let mut values = Vec::with_capacity(columns.len() - 1);
            for store in &catalog.stores {
                for dimm_type in &catalog.dimm_types {
                    let prices: Vec<f64> = records
                        .iter()
                        .filter(|r| r.store() == *store && r.dimm_type() == *dimm_type)
                        .map(PriceRecord::price_per_gb)
                        .collect();
                    values.push(mean(&prices).or(policy.empty_cell()));
                }
            }
            Row { date, values }
        })
        .collect();

    DataTable { columns, rows }
}

/// Min, average, and max price per module for one module type and size, per
/// date.
pub fn module_series(
    book: &PriceBook,
    dimm_type: &str,
    size: i64,
    policy: EmptyPolicy,
) -> DataTable {
    let dimm_type = dimm_type.trim().to_lowercase();
    let columns = vec![
        Column::date("date"),
        Column::number("min"),
        Column::number("average"),
        Column::number("max"),
    ];

    let rows = book
        .dates()
        .map(|date| {
            let prices: Vec<f64> = book
                .records_on(date)
                .iter()
                .filter(|r| r.dimm_type() == dimm_type && r.size() == size)
                .map(PriceRecord::price_per_module)
                .collect();
            let values = match mean(&prices) {
                Some(average) => {
                    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    vec![Some(min), Some(average), Some(max)]
                }
                None => vec![policy.empty_cell(); 3],
            };
            Row { date, values }
        })
        .collect();

    DataTable { columns, rows }
}
