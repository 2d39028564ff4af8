//! Database layer for SeqPaste.

/// Paste storage and id allocation.
pub mod paste;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;

/// Database handle with access to the paste repository.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub pastes: paste::PasteDb,
}

impl Database {
    /// Open (or create) the database under `path` and initialize the paste table.
    ///
    /// `path` is a directory; the redb file lives at
    /// `<path>/`[`tables::REDB_FILE_NAME`]. Initialization is idempotent and
    /// safe to run on every startup.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the file is held
    /// open elsewhere, or table/bootstrap initialization fails.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        std::fs::create_dir_all(dir).map_err(|err| {
            AppError::StorageMessage(format!(
                "Failed to create database directory '{}': {}",
                dir.display(),
                err
            ))
        })?;

        let file = dir.join(tables::REDB_FILE_NAME);
        let db = match redb::Database::create(&file) {
            Ok(db) => Arc::new(db),
            Err(redb::DatabaseError::DatabaseAlreadyOpen) => {
                return Err(AppError::StorageMessage(format!(
                    "Database '{}' is already open.\n\
                    Another SeqPaste instance may be running; stop it or set DB_PATH to a different location.",
                    file.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };

        Self::from_shared(db)
    }

    /// Build a database handle over an already-open redb instance.
    ///
    /// # Errors
    /// Returns an error if paste table initialization fails.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        Ok(Self {
            pastes: paste::PasteDb::new(db.clone())?,
            db,
        })
    }
}

#[cfg(test)]
mod tests;
