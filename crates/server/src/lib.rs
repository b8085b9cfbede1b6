use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod backup;
mod drawer;
mod reports;
mod server;
mod statistics;
mod status;
mod transactions;

pub mod types {
    pub mod transaction {
        pub use api_types::transaction::{
            Source, TransactionCreated, TransactionKind, TransactionList,
            TransactionListResponse, TransactionNew, TransactionView,
        };
    }

    pub mod status {
        pub use api_types::status::{DailyStatusView, StatusKind, StatusListResponse, StatusRecord};
    }

    pub mod drawer {
        pub use api_types::drawer::{
            DenominationClass, DenominationView, DenominationsResponse, DrawerView,
        };
    }

    pub mod stats {
        pub use api_types::stats::Overview;
    }

    pub mod report {
        pub use api_types::report::{ReportBucket, ReportPeriod, ReportQuery, ReportResponse};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
        EngineError::InvalidAmount(_) | EngineError::InvalidReason(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
