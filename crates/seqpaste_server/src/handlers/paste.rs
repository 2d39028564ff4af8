//! Paste HTTP handlers.

use crate::{error::HttpError, models::paste::*, AppState};
use axum::{
    extract::{Path, State},
    Json,
};

/// Create a new paste.
///
/// # Arguments
/// - `state`: Application state.
/// - `req`: Paste creation payload.
///
/// # Returns
/// The allocated id as a JSON number.
///
/// # Errors
/// Returns an error if validation or persistence fails.
pub async fn create_paste(
    State(state): State<AppState>,
    Json(req): Json<CreatePasteRequest>,
) -> Result<Json<i64>, HttpError> {
    let id = state.service.create_paste(&req.title, &req.text)?;
    Ok(Json(id))
}

/// Fetch a paste by id.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Raw paste identifier from the path.
///
/// # Returns
/// The paste as JSON.
///
/// # Errors
/// Returns an error if the id is malformed, the paste does not exist, or
/// lookup fails.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paste>, HttpError> {
    let parsed = id
        .parse::<i64>()
        .map_err(|_| HttpError::InvalidId(id.clone()))?;
    Ok(Json(state.service.get_paste(parsed)?))
}
