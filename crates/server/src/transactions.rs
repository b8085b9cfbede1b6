//! Transactions API endpoints

use api_types::transaction::{
    Source as ApiSource, TransactionCreated, TransactionKind as ApiKind, TransactionList,
    TransactionListResponse, TransactionNew, TransactionView,
};
use axum::{Json, extract::State};
use chrono::{FixedOffset, Utc};

use crate::{ServerError, server::ServerState};
use engine::Money;

fn map_kind_in(kind: ApiKind) -> engine::TransactionKind {
    match kind {
        ApiKind::Add => engine::TransactionKind::Add,
        ApiKind::Subtract => engine::TransactionKind::Subtract,
    }
}

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Add => ApiKind::Add,
        engine::TransactionKind::Subtract => ApiKind::Subtract,
    }
}

fn map_source_in(source: ApiSource) -> engine::Source {
    match source {
        ApiSource::Csc => engine::Source::Csc,
        ApiSource::Csp => engine::Source::Csp,
        ApiSource::Other => engine::Source::Other,
        ApiSource::Cash => engine::Source::Cash,
    }
}

fn map_source(source: engine::Source) -> ApiSource {
    match source {
        engine::Source::Csc => ApiSource::Csc,
        engine::Source::Csp => ApiSource::Csp,
        engine::Source::Other => ApiSource::Other,
        engine::Source::Cash => ApiSource::Cash,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<Json<TransactionCreated>, ServerError> {
    let kind = map_kind_in(payload.kind);
    let source = payload.source.map(map_source_in).unwrap_or_default();
    let amount = Money::from_paise(payload.amount_paise.unwrap_or(0));

    let mut engine = state.engine.write().await;
    let tx = engine
        .apply(
            kind,
            amount,
            &payload.reason,
            payload.denominations,
            source,
            Utc::now(),
        )
        .await?;
    tracing::debug!("applied {} of {} ({})", tx.kind.as_str(), tx.amount, tx.reason);

    Ok(Json(TransactionCreated {
        id: tx.id,
        amount_paise: tx.amount.paise(),
    }))
}

pub async fn list(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionList>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let filter = engine::TransactionFilter {
        kinds: payload
            .kinds
            .map(|kinds| kinds.into_iter().map(map_kind_in).collect()),
        from: payload.from.map(|dt| dt.with_timezone(&Utc)),
        to: payload.to.map(|dt| dt.with_timezone(&Utc)),
        reason_contains: payload.search,
    };
    let limit = payload.limit.unwrap_or(50) as usize;

    let engine = state.engine.read().await;
    let utc = FixedOffset::east_opt(0)
        .ok_or_else(|| ServerError::Generic("invalid UTC offset".to_string()))?;
    let transactions = engine
        .transactions(&filter, limit)
        .into_iter()
        .map(|tx| TransactionView {
            id: tx.id,
            kind: map_kind(tx.kind),
            amount_paise: tx.amount.paise(),
            reason: tx.reason.clone(),
            occurred_at: tx.occurred_at.with_timezone(&utc),
            denominations: tx.denominations.clone(),
            source: map_source(tx.source),
        })
        .collect();

    Ok(Json(TransactionListResponse { transactions }))
}
