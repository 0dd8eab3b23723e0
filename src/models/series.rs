use chrono::NaiveDate;
use serde::Serialize;

/// Chart-ready table: a date column plus one numeric column per series,
/// one row per date present in the source book.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Date,
    Number,
}

/// One date's values, in column order. `None` marks an empty group when the
/// null-if-empty policy is active and serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn date(label: &str) -> Self {
        Self {
            kind: ColumnKind::Date,
            label: label.to_string(),
        }
    }

    pub fn number(label: &str) -> Self {
        Self {
            kind: ColumnKind::Number,
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_chart_collaborator_shape() {
        let table = DataTable {
            columns: vec![
                Column::date("date"),
                Column::number("newegg desktop"),
                Column::number("newegg laptop"),
            ],
            rows: vec![Row {
                date: NaiveDate::from_ymd_opt(2020, 1, 20).unwrap(),
                values: vec![Some(5.62), None],
            }],
        };
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0]["type"], "date");
        assert_eq!(json["columns"][1]["label"], "newegg desktop");
        assert_eq!(json["rows"][0]["date"], "2020-01-20");
        assert_eq!(json["rows"][0]["values"][0], 5.62);
        assert!(json["rows"][0]["values"][1].is_null());
    }
}
