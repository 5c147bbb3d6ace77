use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::data::{loader, sort};

// ---------------------------------------------------------------------------
// One sorting run
// ---------------------------------------------------------------------------

/// Everything needed for a single read → sort → write pass.
#[derive(Debug, Clone)]
pub struct SortJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Requested key column, matched case-insensitively.
    pub qed_field: String,
}

/// What a successful run did, printed as the final status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    /// Key column as spelled in the header.
    pub column: String,
    pub output: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows sorted by '{}' (desc) to {}",
            self.rows,
            self.column,
            self.output.display()
        )
    }
}

/// Load, sort and write.  Every structural check happens before the output
/// file is touched.
pub fn run(job: &SortJob) -> Result<Summary> {
    let table = loader::load(&job.input)?;
    let column = table.header.resolve_column(&job.qed_field)?;
    info!(
        "sorting {} rows by '{}' (column {})",
        table.len(),
        column.name,
        column.index
    );

    let header = table.header;
    let sorted = sort::sort_records(table.records, column.index);
    loader::write(&job.output, &header, &sorted)?;

    Ok(Summary {
        rows: sorted.len(),
        column: column.name,
        output: job.output.clone(),
    })
}
