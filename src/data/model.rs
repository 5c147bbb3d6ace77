use std::collections::HashMap;

use csv::StringRecord;

use crate::error::SortError;

// ---------------------------------------------------------------------------
// Header – ordered column names from the first CSV row
// ---------------------------------------------------------------------------

/// Column names in file order.  Read once, never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    /// The source file started with a UTF-8 byte order mark.
    utf8_bom: bool,
}

/// A column of the header matched by [`Header::resolve_column`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Position of the column in every record.
    pub index: usize,
    /// The column name exactly as written in the header.
    pub name: String,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Header {
            names,
            utf8_bom: false,
        }
    }

    /// Mark the header as preceded by a UTF-8 BOM, which `write` re-emits.
    pub fn with_utf8_bom(mut self, utf8_bom: bool) -> Self {
        self.utf8_bom = utf8_bom;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn utf8_bom(&self) -> bool {
        self.utf8_bom
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Case-insensitive lookup of `requested` against the header names.
    ///
    /// If two header names differ only by case the later one wins.
    pub fn resolve_column(&self, requested: &str) -> Result<ResolvedColumn, SortError> {
        let lookup: HashMap<String, usize> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();

        match lookup.get(&requested.to_lowercase()) {
            Some(&index) => Ok(ResolvedColumn {
                index,
                name: self.names[index].clone(),
            }),
            None => Err(SortError::ColumnNotFound {
                requested: requested.to_string(),
                available: self.names.clone(),
            }),
        }
    }

    pub(crate) fn to_record(&self) -> StringRecord {
        StringRecord::from(self.names.clone())
    }
}

// ---------------------------------------------------------------------------
// Record – one data row
// ---------------------------------------------------------------------------

/// One data row, cells in header order.
///
/// A row may be shorter than the header; trailing cells are then missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    cells: StringRecord,
}

impl Record {
    pub fn new(cells: StringRecord) -> Self {
        Record { cells }
    }

    /// Cell at `index`, or `None` when the row is too short.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index)
    }

    /// Cells padded with empty strings up to `width`.
    pub(crate) fn padded(&self, width: usize) -> StringRecord {
        let mut out = self.cells.clone();
        for _ in out.len()..width {
            out.push_field("");
        }
        out
    }
}

impl<'a> FromIterator<&'a str> for Record {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Record::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Table {
    pub header: Header,
    pub records: Vec<Record>,
}

impl Table {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

// ---------------------------------------------------------------------------
// SortKey – numeric value of the key cell
// ---------------------------------------------------------------------------

/// Ordering key of a record.
///
/// Field order matters for the derived `PartialOrd`: keys compare by
/// `value` first, then a parsed cell ranks above an unparsed one, so a
/// missing value sorts below a literal `-inf`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SortKey {
    /// Parsed value, `-inf` when the cell is unusable.  Never NaN.
    pub value: f64,
    /// Whether the cell held a number at all.
    pub numeric: bool,
}

impl SortKey {
    pub fn is_missing(&self) -> bool {
        !self.numeric
    }
}
