//! Paste service: the two operations exposed to the boundary layer.

use crate::db::Database;
use crate::error::AppError;
use crate::models::paste::{validate_paste, Paste};
use std::sync::Arc;

/// Composes validation and the paste repository.
///
/// Holds no state of its own beyond a shared handle to the repository, so
/// clones are cheap and may be used from any number of request tasks.
#[derive(Clone)]
pub struct PasteService {
    db: Arc<Database>,
}

impl PasteService {
    /// Wrap an opened database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Shared database handle.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Validate and persist a new paste.
    ///
    /// Id allocation and the row write happen in one storage transaction, so
    /// concurrent callers never collide on an id.
    ///
    /// # Returns
    /// The id assigned to the new paste.
    ///
    /// # Errors
    /// [`AppError::Validation`] for empty fields (nothing is written), or a
    /// storage error when allocation or the write fails.
    pub fn create_paste(&self, title: &str, text: &str) -> Result<i64, AppError> {
        validate_paste(title, text)?;

        match self.db.pastes.create(title, text) {
            Ok(id) => {
                tracing::debug!(id, "Created paste");
                Ok(id)
            }
            Err(err) => {
                tracing::error!(operation = "create_paste", error = %err, "Failed to store paste");
                Err(err)
            }
        }
    }

    /// Look up a paste by id.
    ///
    /// The bootstrap row is returned only when asked for by its exact id.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when no row has `id`, or a storage error when the
    /// read fails.
    pub fn get_paste(&self, id: i64) -> Result<Paste, AppError> {
        match self.db.pastes.read(id) {
            Ok(Some(paste)) => Ok(paste),
            Ok(None) => Err(AppError::NotFound),
            Err(err) => {
                tracing::error!(operation = "get_paste", id, error = %err, "Failed to read paste");
                Err(err)
            }
        }
    }
}
