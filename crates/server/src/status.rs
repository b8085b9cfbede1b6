//! Daily status API endpoints

use api_types::status::{
    DailyStatusView, StatusKind as ApiStatusKind, StatusListResponse, StatusRecord,
};
use axum::{Json, extract::State};
use chrono::{FixedOffset, Local, Utc};

use crate::{ServerError, server::ServerState};

fn map_kind_in(kind: ApiStatusKind) -> engine::StatusKind {
    match kind {
        ApiStatusKind::Morning => engine::StatusKind::Morning,
        ApiStatusKind::Evening => engine::StatusKind::Evening,
    }
}

fn map_status(status: &engine::DailyStatus, utc: FixedOffset) -> DailyStatusView {
    DailyStatusView {
        date: status.date,
        morning_cash: status.morning_cash.clone(),
        morning_total_paise: status.morning_total.paise(),
        evening_cash: status.evening_cash.clone(),
        evening_total_paise: status.evening_total.map(|total| total.paise()),
        variance_paise: status.variance.map(|variance| variance.paise()),
        recorded_at: status.recorded_at.with_timezone(&utc),
    }
}

fn utc_offset() -> Result<FixedOffset, ServerError> {
    FixedOffset::east_opt(0).ok_or_else(|| ServerError::Generic("invalid UTC offset".to_string()))
}

/// Records the morning or evening snapshot for the operator's current local
/// date from whatever the drawer holds right now.
pub async fn record(
    State(state): State<ServerState>,
    Json(payload): Json<StatusRecord>,
) -> Result<Json<DailyStatusView>, ServerError> {
    let kind = map_kind_in(payload.kind);
    let today = Local::now().date_naive();

    let mut engine = state.engine.write().await;
    let record = engine.record_status(kind, today, Utc::now()).await?;
    tracing::debug!("recorded {} status for {}", kind.as_str(), record.date);

    Ok(Json(map_status(&record, utc_offset()?)))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<StatusListResponse>, ServerError> {
    let engine = state.engine.read().await;
    let utc = utc_offset()?;
    let statuses = engine
        .statuses()
        .iter_newest_first()
        .map(|status| map_status(status, utc))
        .collect();

    Ok(Json(StatusListResponse { statuses }))
}

pub async fn today(
    State(state): State<ServerState>,
) -> Result<Json<Option<DailyStatusView>>, ServerError> {
    let engine = state.engine.read().await;
    let utc = utc_offset()?;
    let today = Local::now().date_naive();

    Ok(Json(
        engine
            .status_for(today)
            .map(|status| map_status(status, utc)),
    ))
}
