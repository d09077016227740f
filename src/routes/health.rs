use axum::{Json, extract::State};
use serde::Serialize;

use crate::{AppState, error::Result};

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub storage: &'static str,
}

pub async fn health_check() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// Ready only once the product store answers.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Readiness>> {
    state.products.check_storage().await?;

    Ok(Json(Readiness {
        status: "ready",
        storage: "connected",
    }))
}
