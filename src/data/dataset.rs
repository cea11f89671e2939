//! Dataset loading: CSV parsing and numeric coercion.
//!
//! The source is a plain comma-separated file with a header row. Only the
//! columns named below are read; anything else is ignored. All six metric
//! columns are textual in the source and must coerce to finite numbers, so
//! a missing or malformed cell is a load-time error naming the line and
//! column rather than a NaN smuggled into the chart.

use std::path::Path;

use thiserror::Error;

/// One entity per US state.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub obesity: f64,
    pub smokes: f64,
    pub healthcare: f64,
}

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is empty")]
    Empty,
    #[error("dataset has a header but no data rows")]
    NoRecords,
    #[error("missing required column '{name}'")]
    MissingColumn { name: &'static str },
    #[error("line {line}: missing value for column '{column}'")]
    MissingValue { line: usize, column: &'static str },
    #[error("line {line}, column '{column}': '{value}' is not a finite number")]
    BadValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// An ordered sequence of records, loaded once and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

/// Header indices of the columns we read.
struct Columns {
    state: usize,
    abbr: usize,
    poverty: usize,
    age: usize,
    income: usize,
    obesity: usize,
    smokes: usize,
    healthcare: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, DataError> {
        let cols: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &'static str| {
            cols.iter()
                .position(|c| *c == name)
                .ok_or(DataError::MissingColumn { name })
        };
        Ok(Columns {
            state: find("state")?,
            abbr: find("abbr")?,
            poverty: find("poverty")?,
            age: find("age")?,
            income: find("income")?,
            obesity: find("obesity")?,
            smokes: find("smokes")?,
            healthcare: find("healthcare")?,
        })
    }
}

fn cell<'a>(
    fields: &[&'a str],
    index: usize,
    column: &'static str,
    line: usize,
) -> Result<&'a str, DataError> {
    fields
        .get(index)
        .copied()
        .filter(|s| !s.is_empty())
        .ok_or(DataError::MissingValue { line, column })
}

fn metric(
    fields: &[&str],
    index: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, DataError> {
    let raw = cell(fields, index, column, line)?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataError::BadValue {
            line,
            column,
            value: raw.to_string(),
        })
}

impl Dataset {
    /// Read and parse a CSV file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Parse CSV text (header row plus one row per state).
    pub fn from_csv_str(text: &str) -> Result<Self, DataError> {
        let mut lines = text.lines().enumerate();
        let header = loop {
            match lines.next() {
                None => return Err(DataError::Empty),
                Some((_, l)) if l.trim().is_empty() => continue,
                Some((_, l)) => break l,
            }
        };
        let columns = Columns::from_header(header)?;

        let mut records = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let lineno = index + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            records.push(Record {
                state: cell(&fields, columns.state, "state", lineno)?.to_string(),
                abbr: cell(&fields, columns.abbr, "abbr", lineno)?.to_string(),
                poverty: metric(&fields, columns.poverty, "poverty", lineno)?,
                age: metric(&fields, columns.age, "age", lineno)?,
                income: metric(&fields, columns.income, "income", lineno)?,
                obesity: metric(&fields, columns.obesity, "obesity", lineno)?,
                smokes: metric(&fields, columns.smokes, "smokes", lineno)?,
                healthcare: metric(&fields, columns.healthcare, "healthcare", lineno)?,
            });
        }
        if records.is_empty() {
            return Err(DataError::NoRecords);
        }
        Ok(Dataset { records })
    }

    /// Build a dataset from already-parsed records (mainly for tests and
    /// embedded use).
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}
