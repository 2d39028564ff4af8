//! Shared test-only helpers for seqpaste_core.

use crate::{Database, PasteService};
use std::sync::Arc;
use tempfile::TempDir;

/// Creates an isolated temporary database and returns it with the temp dir.
///
/// Keep the [`TempDir`] alive for the full test to preserve the backing files.
///
/// # Panics
/// Panics if temp-dir creation, path conversion, or database initialization
/// fails in the test environment.
pub(crate) fn setup_temp_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("db");
    let db = Database::new(db_path.to_str().expect("db path")).expect("db");
    (db, temp_dir)
}

/// Same as [`setup_temp_db`], wrapped in a [`PasteService`].
pub(crate) fn setup_temp_service() -> (PasteService, TempDir) {
    let (db, temp_dir) = setup_temp_db();
    (PasteService::new(Arc::new(db)), temp_dir)
}
