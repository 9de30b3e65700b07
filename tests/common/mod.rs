// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use dispendio::application::Ledger;
use dispendio::domain::ExpenseRecord;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a test ledger backed by a file in a temporary directory
pub fn test_ledger() -> Result<(Ledger, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = store_path(&temp_dir);
    let ledger = Ledger::open(path)?;
    Ok((ledger, temp_dir))
}

/// Path of the expense file inside a test directory
pub fn store_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("expenses.csv")
}

/// Sample record with every field filled in
pub fn lunch() -> ExpenseRecord {
    ExpenseRecord::new("2024-01-15", "42.50", "Food", "lunch")
}

/// Sample record with an empty description
pub fn bus_ticket() -> ExpenseRecord {
    ExpenseRecord::new("2024-01-16", "10", "Transport", "")
}

/// Sample record for a third category
pub fn cinema() -> ExpenseRecord {
    ExpenseRecord::new("2024-02-01", "18.00", "Entertainment", "two tickets")
}
