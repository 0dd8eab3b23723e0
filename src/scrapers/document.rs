use chrono::NaiveDate;
use std::fmt;

use super::Catalog;
use super::description::{self, DescriptionError};
use crate::models::book::PriceBook;
use crate::models::record::{PriceRecord, RecordError};

/// Date headers are recognized by their century prefix.
const YEAR_PREFIX: &str = "20";

/// Marks a list-item line carrying one description token.
const ITEM_PREFIX: &str = "- ";

/// Error types for document parsing. Any of these aborts the whole
/// document: a document either yields a fully validated book or nothing.
#[derive(Debug)]
pub enum DocumentError {
    Description(DescriptionError),
    Record(RecordError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Description(e) => write!(f, "bad description token: {}", e),
            DocumentError::Record(e) => write!(f, "bad price record: {}", e),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Description(e) => Some(e),
            DocumentError::Record(e) => Some(e),
        }
    }
}

impl From<DescriptionError> for DocumentError {
    fn from(e: DescriptionError) -> Self {
        DocumentError::Description(e)
    }
}

impl From<RecordError> for DocumentError {
    fn from(e: RecordError) -> Self {
        DocumentError::Record(e)
    }
}

/// Flat parse context. A header overwrites exactly one field, and that
/// value applies to every later list item until the same category of
/// header appears again. Indentation is never consulted, so context
/// deliberately bleeds across what the source text draws as sections.
#[derive(Debug, Default)]
struct Context {
    date: Option<NaiveDate>,
    dimm_type: Option<String>,
    store: Option<String>,
}

/// Line-oriented parser for the hand-authored price documents.
pub struct DocumentParser {
    catalog: Catalog,
}

impl DocumentParser {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a whole document into a [`PriceBook`].
    ///
    /// Headers (`…:` lines) update the context; `- ` lines decode into
    /// records under the current context. Tokens whose decoded size is zero
    /// carry no usable price and are skipped; every other decode or
    /// validation failure is fatal. Unrecognized lines and headers are
    /// ignored.
    pub fn parse(&self, text: &str) -> Result<PriceBook, DocumentError> {
        let mut context = Context::default();
        let mut book = PriceBook::new();

        for raw in text.lines() {
            let line = raw.trim().to_lowercase();
            if let Some(header) = line.strip_suffix(':') {
                self.apply_header(header, &mut context);
            } else if let Some(token) = line.strip_prefix(ITEM_PREFIX) {
                let decoded = description::decode(token)?;
                if decoded.size == 0 {
                    tracing::debug!(token, "skipping token without a usable price");
                    continue;
                }
                let record = PriceRecord::new(
                    context.date,
                    context.dimm_type.as_deref(),
                    context.store.as_deref(),
                    decoded.count,
                    decoded.size,
                    decoded.price,
                    &decoded.brand,
                )?;
                book.push(record);
            }
        }

        tracing::debug!(
            dates = book.date_count(),
            records = book.record_count(),
            "parsed price document"
        );
        Ok(book)
    }

    fn apply_header(&self, header: &str, context: &mut Context) {
        if header.starts_with(YEAR_PREFIX) {
            // An unparseable date clears the context so following items
            // fail fast instead of filing under a stale date.
            context.date = NaiveDate::parse_from_str(header, "%Y-%m-%d").ok();
        } else if self.catalog.is_dimm_type(header) {
            context.dimm_type = Some(header.to_string());
        } else if self.catalog.is_store(header) {
            context.store = Some(header.to_string());
        }
    }
}
