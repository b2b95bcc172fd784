use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewClient {
    pub name: Option<String>,
}

/// GET /clients
pub async fn list_clients(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.reference.list_clients()?))
}

/// POST /clients
pub async fn add_client(
    state: web::Data<AppState>,
    body: web::Json<NewClient>,
) -> Result<HttpResponse, ApiError> {
    let name = state
        .reference
        .add_client(body.name.as_deref().unwrap_or_default())?;
    Ok(HttpResponse::Created().json(json!({ "name": name })))
}
