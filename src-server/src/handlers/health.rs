use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;

/// GET /healthz
///
/// 200 while storage answers, 503 otherwise.
pub async fn healthz(state: web::Data<AppState>) -> HttpResponse {
    match state.db.ping() {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unavailable",
                "database": e.to_string(),
                "version": env!("CARGO_PKG_VERSION"),
            }))
        }
    }
}
