//! Drawer and denomination catalog API endpoints

use api_types::drawer::{
    DenominationClass as ApiClass, DenominationView, DenominationsResponse, DrawerView,
};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn get(State(state): State<ServerState>) -> Result<Json<DrawerView>, ServerError> {
    let engine = state.engine.read().await;

    Ok(Json(DrawerView {
        counts: engine.drawer().counts().clone(),
        total_paise: engine.drawer_total().paise(),
    }))
}

/// The fixed denomination catalog, for rendering counters.
pub async fn denominations() -> Json<DenominationsResponse> {
    let denominations = engine::CATALOG
        .iter()
        .map(|denomination| DenominationView {
            id: denomination.id.to_string(),
            face_value_paise: denomination.face_value.paise(),
            class: match denomination.class {
                engine::DenominationClass::Note => ApiClass::Note,
                engine::DenominationClass::Coin => ApiClass::Coin,
            },
        })
        .collect();

    Json(DenominationsResponse { denominations })
}
