//! Application error types for core storage and domain logic.
use thiserror::Error;

/// Reasons a paste submission is rejected before touching storage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title empty")]
    TitleEmpty,

    #[error("text empty")]
    TextEmpty,
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Paste id {0} already exists")]
    IdConflict(i64),

    #[error("Storage error: {0}")]
    StorageMessage(String),
}

/// Coarse outcome classes consumed by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input was rejected; never retried automatically.
    Validation,
    /// The requested paste does not exist.
    NotFound,
    /// Any failure of the underlying store.
    Storage,
}

impl AppError {
    /// Classify this error for status mapping.
    ///
    /// # Returns
    /// [`ErrorKind::Storage`] for every database, serialization, conflict, or
    /// storage-message failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound => ErrorKind::NotFound,
            AppError::Database(_)
            | AppError::Serialization(_)
            | AppError::IdConflict(_)
            | AppError::StorageMessage(_) => ErrorKind::Storage,
        }
    }
}

impl From<redb::DatabaseError> for AppError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TransactionError> for AppError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TableError> for AppError {
    fn from(value: redb::TableError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::StorageError> for AppError {
    fn from(value: redb::StorageError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::CommitError> for AppError {
    fn from(value: redb::CommitError) -> Self {
        Self::Database(value.into())
    }
}
