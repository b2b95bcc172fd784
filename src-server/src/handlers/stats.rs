use actix_web::{web, HttpResponse};

use jobboard::{stats_by_category_and_status, stats_by_client, stats_by_employee, JobQuery};

use super::JobFilterParams;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /stats?client=&date=
pub async fn overview(
    state: web::Data<AppState>,
    params: web::Query<JobFilterParams>,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.jobs.list_jobs(&params.to_query()?)?;
    Ok(HttpResponse::Ok().json(stats_by_category_and_status(&jobs)))
}

/// GET /stats/employees
pub async fn by_employee(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let employees = state.reference.list_employees()?;
    let jobs = state.jobs.list_jobs(&JobQuery::default())?;
    Ok(HttpResponse::Ok().json(stats_by_employee(&jobs, &employees)))
}

/// GET /stats/clients
pub async fn by_client(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let clients = state.reference.list_clients()?;
    let jobs = state.jobs.list_jobs(&JobQuery::default())?;
    Ok(HttpResponse::Ok().json(stats_by_client(&jobs, &clients)))
}
