use actix_web::{web, HttpResponse};

use jobboard::JobQuery;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /employees
pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.reference.list_employees()?))
}

/// GET /employees/{name}/jobs
pub async fn employee_jobs(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let jobs = state
        .jobs
        .list_jobs(&JobQuery::for_employee(name.into_inner()))?;
    Ok(HttpResponse::Ok().json(jobs))
}
