use redb::{CommitError, StorageError, TableError, TransactionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Redb storage error: {0}")]
    RedbStorage(#[from] StorageError),
    #[error("Redb transaction error: {0}")]
    RedbTransaction(#[from] TransactionError),
    #[error("Redb table error: {0}")]
    RedbTable(#[from] TableError),
    #[error("Redb commit error: {0}")]
    RedbCommit(#[from] CommitError),
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Corrupt column '{column}': {reason}")]
    Corrupt { column: &'static str, reason: String },
    #[error("Item not found in database: {0}")]
    NotFound(String),
}

pub mod library_db_operations;
pub mod planner_db_operations;
pub mod profiles_db_operations;
