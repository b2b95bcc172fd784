use actix_web::{web, HttpResponse};
use serde::Deserialize;

use jobboard::{build_report, ReportRequest};

use super::parse_optional_day;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub client: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /reports?client=&from=&to=
pub async fn job_report(
    state: web::Data<AppState>,
    params: web::Query<ReportParams>,
) -> Result<HttpResponse, ApiError> {
    let from = parse_optional_day(params.from.as_deref())?
        .ok_or_else(|| ApiError::bad_request("from is required"))?;
    let to = parse_optional_day(params.to.as_deref())?
        .ok_or_else(|| ApiError::bad_request("to is required"))?;

    let request = ReportRequest::new(params.client.clone(), from, to)?;
    Ok(HttpResponse::Ok().json(build_report(&state.jobs, &request)?))
}
