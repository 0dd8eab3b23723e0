use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::record::PriceRecord;

/// All validated observations from one document, keyed by calendar date.
///
/// `BTreeMap` keys double as the ascending date axis of every derived
/// series. The parser fills the book once; afterwards it is only read.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    by_date: BTreeMap<NaiveDate, Vec<PriceRecord>>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a record under its own date, creating the day's list on first use.
    pub(crate) fn push(&mut self, record: PriceRecord) {
        self.by_date.entry(record.date()).or_default().push(record);
    }

    /// Distinct dates present, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Records observed on `date`; empty when the date is absent.
    pub fn records_on(&self, date: NaiveDate) -> &[PriceRecord] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn record_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
