//! Tabular result of a slice download.
//!
//! The column set is whatever header row the server sent; nothing here checks
//! column names or counts beyond aligning each row to the header.

#[cfg(feature = "dataframe")]
mod dataframe;
mod record;

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use record::QuarterlyRecord;

use crate::core::QcewError;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

/// Header row plus data rows, in download order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Arc<[String]>,
    rows: Vec<Row>,
}

/// One data row aligned to its table's header.
///
/// A `None` cell means the source row ended before that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Table {
    /// Decode delimited text with a header row.
    ///
    /// Ragged rows are accepted, every field is trimmed and whitespace-only
    /// lines are skipped. A row of bare delimiters such as `,,` is kept as
    /// empty cells. Empty input yields an empty table.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, QcewError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Arc<[String]> = rdr.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();

        let mut rows = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            // a whitespace-only line trims down to a single empty field
            if record.len() <= 1 && record.get(0).is_none_or(str::is_empty) {
                continue;
            }
            if record.len() > width {
                tracing::debug!(
                    record = idx + 1,
                    fields = record.len(),
                    width,
                    "dropping fields beyond the header"
                );
            }
            let values = (0..width)
                .map(|i| record.get(i).map(str::to_string))
                .collect();
            rows.push(Row {
                headers: Arc::clone(&headers),
                values,
            });
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of column `name`, or `None` if the header has no such column.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = Option<&'a str>> + 'a> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(move |r| r.values[idx].as_deref()))
    }

    /// Decode every row into `T`, matching struct fields to header names.
    ///
    /// Missing and empty cells read as empty strings, so `Option` fields become `None`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Vec<T>, QcewError> {
        let header = csv::StringRecord::from(self.headers.to_vec());
        self.rows
            .iter()
            .map(|row| {
                let record: csv::StringRecord = row
                    .values
                    .iter()
                    .map(|v| v.as_deref().unwrap_or_default())
                    .collect();
                record.deserialize(Some(&header)).map_err(QcewError::from)
            })
            .collect()
    }
}

impl Row {
    /// Cell for column `name`; `None` when the column is unknown or the row is short.
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == name)?;
        self.values.get(idx)?.as_deref()
    }

    /// Cells in header order.
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Present cells keyed by column name.
    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.headers
            .iter()
            .zip(&self.values)
            .filter_map(|(h, v)| Some((h.as_str(), v.as_deref()?)))
            .collect()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (h, v) in self.headers.iter().zip(&self.values) {
            map.serialize_entry(h, v)?;
        }
        map.end()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Table", 2)?;
        s.serialize_field("headers", &*self.headers)?;
        s.serialize_field("rows", &self.rows)?;
        s.end()
    }
}
