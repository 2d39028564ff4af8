//! redb table definitions shared by storage modules.

use redb::TableDefinition;

/// File name for the redb database within the configured DB directory.
pub const REDB_FILE_NAME: &str = "data.redb";

/// Canonical paste rows keyed by id (`Paste`, bincode-encoded).
pub const PASTES: TableDefinition<i64, &[u8]> = TableDefinition::new("pastes");
