//! Backup API endpoints

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::{ServerError, server::ServerState};
use engine::Backup;

pub async fn export(State(state): State<ServerState>) -> Result<Json<Backup>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.export_state(Utc::now())))
}

/// Restores state from a raw backup bundle.
///
/// The bundle is decoded before anything is touched, so a malformed body
/// leaves the current state fully intact.
pub async fn import(
    State(state): State<ServerState>,
    body: String,
) -> Result<StatusCode, ServerError> {
    let bundle = Backup::from_json(&body)?;

    let mut engine = state.engine.write().await;
    engine.import_state(bundle).await?;
    tracing::info!("state restored from backup bundle");

    Ok(StatusCode::NO_CONTENT)
}
