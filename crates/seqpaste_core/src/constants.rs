//! Shared constants used across SeqPaste crates.

/// Default API port for SeqPaste.
pub const DEFAULT_PORT: u16 = 3001;

/// Default maximum request body accepted by the API layer.
pub const DEFAULT_MAX_PASTE_SIZE: usize = 10 * 1024 * 1024;

/// Id of the sentinel row that gives the allocator its starting maximum.
pub const BOOTSTRAP_PASTE_ID: i64 = -1;
/// Title stored on the bootstrap row.
pub const BOOTSTRAP_PASTE_TITLE: &str = "seed";
/// Text stored on the bootstrap row.
pub const BOOTSTRAP_PASTE_TEXT: &str = "seed";
