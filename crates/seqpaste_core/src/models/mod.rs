//! Data models for API requests and persistence.

/// Paste records, request payloads, and validation.
pub mod paste;
