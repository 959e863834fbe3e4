//! Service health endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Which backend the repositories are wired to: "postgres" or "memory".
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /api/health
///
/// Liveness plus the active store, so an operator can tell a postgres
/// deployment from the in-memory fallback.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = if state.db.is_some() {
        "postgres"
    } else {
        "memory"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        store,
        version: env!("CARGO_PKG_VERSION"),
    })
}
