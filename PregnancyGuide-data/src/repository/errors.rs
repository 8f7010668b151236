use thiserror::Error;
use crate::tables::TableError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Static table error
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Not found error
    #[error("Record not found: {0}")]
    NotFound(String),
}
