use thiserror::Error;

use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no expense at position {index}: the ledger holds {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
