use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ExpenseRecord;

/// Errors raised by the persisted store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A row in the store could not be decoded as an expense record.
    #[error("corrupt expense file {path}: row {row} is not a valid expense")]
    Corrupt {
        path: PathBuf,
        /// 1-based line number of the offending row, header included.
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// The store exists but could not be opened or read.
    #[error("cannot read expense file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store could not be rewritten.
    #[error("cannot write expense file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    fn write(path: &Path, source: csv::Error) -> Self {
        StoreError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Column names of the persisted table, in field order.
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Flat-file store for expense records.
///
/// The on-disk format is a CSV table with the fixed header
/// `Date,Amount,Category,Description` and one row per record in ledger
/// order. Every save rewrites the whole file; there is no append-only log.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store. A missing file is an empty ledger, not an
    /// error. A row that cannot be decoded fails with [`StoreError::Corrupt`]
    /// naming the offending line.
    pub fn load(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut records = Vec::new();

        for (row_num, row) in reader.deserialize().enumerate() {
            let record: ExpenseRecord = row.map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                row: row_num + 2, // +2 for header and 0-indexing
                source,
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Rewrite the whole store from `records`, in order, overwriting any
    /// previous content.
    ///
    /// The header row is written unconditionally so that an emptied ledger
    /// still leaves a well-formed table behind.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| StoreError::write(&self.path, e))?;

        writer
            .write_record(HEADER)
            .map_err(|e| StoreError::write(&self.path, e))?;

        for record in records {
            writer
                .serialize(record)
                .map_err(|e| StoreError::write(&self.path, e))?;
        }

        writer
            .flush()
            .map_err(|e| StoreError::write(&self.path, csv::Error::from(e)))?;

        Ok(())
    }
}
