//! Row-oriented tables: raw rows as loaded from CSV, and cleaned rows with
//! the two derived columns attached.

use crate::config::{
    DESCRIPTION_OUTPUT_COLUMN, MISSING_CELL_TEXT, MISSING_MARKERS, TWEETS_COLUMN,
};
use crate::error::DataSourceError;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One field value. Empty fields and the usual NA markers load as `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Missing,
}

impl Cell {
    pub fn parse(field: &str) -> Self {
        if MISSING_MARKERS.contains(&field) {
            Cell::Missing
        } else {
            Cell::Text(field.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => f.write_str(MISSING_CELL_TEXT),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub fields: IndexMap<String, Cell>,
}

impl RawRecord {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.fields.get(column)
    }

    /// Like [`get`](Self::get), but an absent column reads as `Missing`.
    pub fn cell(&self, column: &str) -> &Cell {
        self.fields.get(column).unwrap_or(&Cell::Missing)
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub raw: RawRecord,
    /// Cleaned `text`, split into tokens with stop words removed.
    pub tweets: Vec<String>,
    /// Cleaned `description`, not tokenized.
    pub description: String,
}

// Original columns first, then the derived ones. A source column that already
// carries a derived name is replaced, not duplicated.
impl Serialize for CleanedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let originals: Vec<_> = self
            .raw
            .fields
            .iter()
            .filter(|(k, _)| k.as_str() != TWEETS_COLUMN && k.as_str() != DESCRIPTION_OUTPUT_COLUMN)
            .collect();

        let mut map = serializer.serialize_map(Some(originals.len() + 2))?;
        for (k, v) in originals {
            map.serialize_entry(k, v)?;
        }
        map.serialize_entry(TWEETS_COLUMN, &self.tweets)?;
        map.serialize_entry(DESCRIPTION_OUTPUT_COLUMN, &self.description)?;
        map.end()
    }
}

/// Raw rows as loaded, header order preserved.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Source columns; `Tweets` and `Description` are implied.
    pub columns: Vec<String>,
    pub records: Vec<CleanedRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanedRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CleanedRecord;
    type IntoIter = std::slice::Iter<'a, CleanedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub fn load_csv(path: impl AsRef<Path>, required: &[&str]) -> Result<Table, DataSourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv(file, &path.display().to_string(), required)?;
    info!(
        "Loaded {} rows, {} columns from {:?}",
        table.len(),
        table.columns.len(),
        path
    );
    Ok(table)
}

/// Renames repeated header names to `name.1`, `name.2`, ... so every column
/// survives and a plain name refers to its first occurrence.
fn dedupe_columns<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::new();

    for name in names {
        let mut column = name.to_string();
        let mut seen = counts.get(&column).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(column.clone(), seen + 1);
            column = format!("{column}.{seen}");
            seen = counts.get(&column).copied().unwrap_or(0);
        }
        counts.insert(column.clone(), seen + 1);
        columns.push(column);
    }

    columns
}

/// Parses comma-delimited text with a header row. Short rows are padded with
/// `Missing`; rows with more fields than the header are rejected. Repeated
/// header names are suffixed (see [`dedupe_columns`]).
pub fn read_csv<R: Read>(
    reader: R,
    origin: &str,
    required: &[&str],
) -> Result<Table, DataSourceError> {
    let csv_err = |source| DataSourceError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = dedupe_columns(rdr.headers().map_err(csv_err)?.iter());

    for column in required {
        if !columns.iter().any(|c| c == column) {
            return Err(DataSourceError::MissingColumn {
                origin: origin.to_string(),
                column: column.to_string(),
                found: columns.clone(),
            });
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        if record.len() > columns.len() {
            return Err(DataSourceError::RaggedRow {
                origin: origin.to_string(),
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }

        let fields = columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let cell = record.get(i).map(Cell::parse).unwrap_or(Cell::Missing);
                (name.clone(), cell)
            })
            .collect();
        rows.push(RawRecord { fields });
    }

    Ok(Table { columns, rows })
}
