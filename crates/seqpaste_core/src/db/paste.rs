//! Paste storage and sequential id allocation backed by redb.

use crate::constants::{BOOTSTRAP_PASTE_ID, BOOTSTRAP_PASTE_TEXT, BOOTSTRAP_PASTE_TITLE};
use crate::db::tables::PASTES;
use crate::error::AppError;
use crate::models::paste::Paste;
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Accessor for the paste table.
///
/// The table always contains the bootstrap row (id `-1`) once constructed, so
/// the allocator has a defined starting maximum.
pub struct PasteDb {
    db: Arc<redb::Database>,
}

fn deserialize_paste(bytes: &[u8]) -> Result<Paste, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Compute `max(id) + 1` over the rows visible to `table`.
fn next_id_in<T>(table: &T) -> Result<i64, AppError>
where
    T: ReadableTable<i64, &'static [u8]>,
{
    let Some((max_key, _)) = table.last()? else {
        return Err(AppError::StorageMessage(
            "Paste table has no rows; bootstrap row is missing".to_string(),
        ));
    };
    let max_id = max_key.value();
    max_id.checked_add(1).ok_or_else(|| {
        AppError::StorageMessage(format!("Paste id space exhausted at {}", max_id))
    })
}

impl PasteDb {
    /// Bind to `db` and run [`PasteDb::initialize`].
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let pastes = Self { db };
        pastes.initialize()?;
        Ok(pastes)
    }

    /// Create the paste table if absent and insert the bootstrap row if absent.
    ///
    /// Existing rows, including a present bootstrap row, are left untouched.
    ///
    /// # Errors
    /// Returns an error when storage or serialization fails.
    pub fn initialize(&self) -> Result<(), AppError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut pastes = write_txn.open_table(PASTES)?;
            if pastes.get(BOOTSTRAP_PASTE_ID)?.is_none() {
                let seed = Paste::new(
                    BOOTSTRAP_PASTE_ID,
                    BOOTSTRAP_PASTE_TITLE.to_string(),
                    BOOTSTRAP_PASTE_TEXT.to_string(),
                );
                let encoded = bincode::serialize(&seed)?;
                pastes.insert(BOOTSTRAP_PASTE_ID, encoded.as_slice())?;
                tracing::debug!("Inserted bootstrap paste row");
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Return one more than the current maximum id, bootstrap row included.
    ///
    /// This is a read-only snapshot: two callers may observe the same value.
    /// Use [`PasteDb::create`] when the id must be allocated and written as
    /// one unit.
    ///
    /// # Errors
    /// Returns an error when the read fails, the table is empty, or the id
    /// space is exhausted.
    pub fn next_id(&self) -> Result<i64, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        next_id_in(&pastes)
    }

    /// Insert a paste row under an explicit id.
    ///
    /// # Errors
    /// Returns [`AppError::IdConflict`] when `id` already exists (the stored row
    /// is not overwritten), or a storage error when the write fails.
    pub fn insert(&self, id: i64, title: &str, text: &str) -> Result<(), AppError> {
        let encoded = bincode::serialize(&Paste::new(id, title.to_string(), text.to_string()))?;

        let write_txn = self.db.begin_write()?;
        {
            let mut pastes = write_txn.open_table(PASTES)?;
            if pastes.get(id)?.is_some() {
                return Err(AppError::IdConflict(id));
            }
            pastes.insert(id, encoded.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Allocate the next id and insert the row inside one write transaction.
    ///
    /// redb admits a single write transaction at a time, so concurrent
    /// callers are serialized and always receive distinct, increasing ids.
    ///
    /// # Returns
    /// The id assigned to the new row.
    ///
    /// # Errors
    /// Returns an error when allocation, serialization, or the write fails.
    /// Nothing is persisted on failure.
    pub fn create(&self, title: &str, text: &str) -> Result<i64, AppError> {
        let write_txn = self.db.begin_write()?;
        let id = {
            let mut pastes = write_txn.open_table(PASTES)?;
            let id = next_id_in(&pastes)?;
            let encoded =
                bincode::serialize(&Paste::new(id, title.to_string(), text.to_string()))?;
            pastes.insert(id, encoded.as_slice())?;
            id
        };
        write_txn.commit()?;
        Ok(id)
    }

    /// Fetch a paste by id.
    ///
    /// # Returns
    /// `Ok(Some(paste))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn read(&self, id: i64) -> Result<Option<Paste>, AppError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES)?;
        match pastes.get(id)? {
            Some(value) => Ok(Some(deserialize_paste(value.value())?)),
            None => Ok(None),
        }
    }
}
