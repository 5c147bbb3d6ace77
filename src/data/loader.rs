use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use super::model::{Header, Record, Table};
use crate::error::SortError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Load a whole CSV file into memory.
///
/// The first row is the header.  Data rows may be shorter than the header
/// (their trailing cells are treated as missing) but never longer.
pub fn load(path: &Path) -> Result<Table> {
    if !path.exists() {
        bail!(SortError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let header_row = reader.headers().context("reading CSV headers")?;
    if header_row.is_empty() {
        bail!(SortError::MissingHeader(path.to_path_buf()));
    }
    // The csv reader drops a leading BOM from the header; remember it so the
    // output header comes out byte-identical.
    let header = Header::new(header_row.iter().map(|h| h.to_string()).collect())
        .with_utf8_bom(starts_with_bom(path)?);
    debug!("header: {:?}", header.names());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.with_context(|| format!("reading CSV row {}", records.len() + 1))?;
        if row.len() > header.len() {
            let line = row.position().map_or(records.len() as u64 + 2, |p| p.line());
            bail!(SortError::RowTooLong {
                line,
                len: row.len(),
                width: header.len(),
            });
        }
        records.push(Record::new(row));
    }

    info!("loaded {} rows from {}", records.len(), path.display());
    Ok(Table { header, records })
}

fn starts_with_bom(path: &Path) -> Result<bool> {
    let mut prefix = Vec::with_capacity(UTF8_BOM.len());
    File::open(path)
        .and_then(|f| f.take(UTF8_BOM.len() as u64).read_to_end(&mut prefix))
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(prefix == UTF8_BOM)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write `header` followed by `records` to `path`, creating parent
/// directories as needed.  Short rows are padded to the header width.
pub fn write(path: &Path, header: &Header, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("creating CSV {}", path.display()))?;
    if header.utf8_bom() {
        file.write_all(UTF8_BOM).context("writing byte order mark")?;
    }
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(&header.to_record())
        .context("writing CSV header")?;
    for (row_no, record) in records.iter().enumerate() {
        writer
            .write_record(&record.padded(header.len()))
            .with_context(|| format!("writing CSV row {}", row_no + 1))?;
    }
    writer.flush().context("flushing CSV output")?;

    debug!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
