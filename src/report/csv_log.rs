//! Append-only CSV log of sweep results

use std::{
    fs::{self, File, OpenOptions},
    path::Path,
};

use crate::error::Result;
use crate::experiment::SweepRow;

pub const HEADER: [&str; 6] = [
    "algorithm",
    "vertex_count",
    "edge_probability",
    "trials",
    "mean_time_s",
    "mean_size",
];

/// Appends sweep rows to a CSV file, writing the header only if the file starts out empty.
pub struct SweepLog {
    writer: csv::Writer<File>,
}

impl SweepLog {
    pub fn open(path: &Path) -> Result<SweepLog> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let empty = file.metadata()?.len() == 0;

        let mut writer = csv::Writer::from_writer(file);
        if empty {
            writer.write_record(HEADER)?;
            writer.flush()?;
        }
        Ok(SweepLog { writer })
    }

    /// writes one row and flushes, so an interrupted sweep keeps what it finished
    pub fn append(&mut self, row: &SweepRow, edge_probability: f64) -> Result<()> {
        self.writer.write_record(&[
            row.algorithm.key().to_string(),
            row.vertex_count.to_string(),
            edge_probability.to_string(),
            row.metrics.trials.to_string(),
            row.metrics.mean_time.to_string(),
            row.metrics.mean_size.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
