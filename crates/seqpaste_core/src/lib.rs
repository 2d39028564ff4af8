//! Core domain library for SeqPaste (config, storage, models, service).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants.
pub mod constants;
/// Database access layer and id allocation.
pub mod db;
/// Application error types (validation/storage/domain).
pub mod error;
/// Data models and validation.
pub mod models;
/// Paste service composing validation and storage.
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use db::Database;
pub use error::{AppError, ErrorKind, ValidationError};
pub use service::PasteService;
