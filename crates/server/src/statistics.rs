//! Statistics API endpoints

use api_types::stats::Overview;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the till overview.
pub async fn get_stats(
    State(state): State<ServerState>,
) -> Result<Json<Overview>, ServerError> {
    let engine = state.engine.read().await;
    let balances = engine.balances();
    let lifetime = engine.lifetime_activity();

    Ok(Json(Overview {
        cash_paise: engine.drawer_total().paise(),
        csc_paise: balances.csc.paise(),
        csp_paise: balances.csp.paise(),
        other_paise: balances.other.paise(),
        total_paise: engine.total_balance().paise(),
        lifetime_added_paise: lifetime.added.paise(),
        lifetime_removed_paise: lifetime.removed.paise(),
    }))
}
