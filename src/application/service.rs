use std::path::{Path, PathBuf};

use crate::domain::ExpenseRecord;
use crate::storage::CsvStore;

use super::AppError;

/// The authoritative, ordered list of expenses plus its persisted mirror.
/// This is the primary interface for any client (CLI, TUI, etc.).
///
/// Insertion order is display order is persisted row order, and a record's
/// position is its only identity. Every mutation rewrites the whole store;
/// there is no incremental persistence.
#[derive(Debug)]
pub struct Ledger {
    store: CsvStore,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Open the ledger backed by the file at `path`.
    ///
    /// A missing file yields an empty ledger. A file that exists but cannot
    /// be decoded fails with [`StoreError::Corrupt`] naming the offending
    /// row; no rows are silently dropped.
    ///
    /// [`StoreError::Corrupt`]: crate::storage::StoreError::Corrupt
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = CsvStore::new(path);
        let records = store.load()?;
        Ok(Self { store, records })
    }

    /// Path of the persisted store backing this ledger.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Append `record` to the end of the ledger and persist.
    ///
    /// Field contents are not validated; empty strings are accepted. If the
    /// rewrite fails the record stays in memory and the error surfaces to
    /// the caller, who may retry with [`Ledger::persist`].
    pub fn append(&mut self, record: ExpenseRecord) -> Result<(), AppError> {
        self.records.push(record);
        self.persist()
    }

    /// Remove the record at `index`, shifting later records down by one,
    /// then persist. Returns the removed record.
    ///
    /// An out-of-range index fails with [`AppError::IndexOutOfRange`] and
    /// leaves the ledger untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<ExpenseRecord, AppError> {
        if index >= self.records.len() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// All records in display order, as a read-only view.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrite the persisted store from the in-memory list, overwriting
    /// any previous content.
    pub fn persist(&self) -> Result<(), AppError> {
        Ok(self.store.save(&self.records)?)
    }
}
