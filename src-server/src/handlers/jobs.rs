use actix_web::{web, HttpResponse};
use serde_json::json;

use jobboard::stats::filter_by_bucket;
use jobboard::{JobBucket, JobPayload};

use super::JobFilterParams;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /jobs?client=&date=
pub async fn list_jobs(
    state: web::Data<AppState>,
    params: web::Query<JobFilterParams>,
) -> Result<HttpResponse, ApiError> {
    let jobs = state.jobs.list_jobs(&params.to_query()?)?;
    Ok(HttpResponse::Ok().json(jobs))
}

/// GET /jobs/{id}
pub async fn get_job(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.jobs.get_job(id.into_inner())?))
}

/// POST /jobs
pub async fn create_job(
    state: web::Data<AppState>,
    body: web::Json<JobPayload>,
) -> Result<HttpResponse, ApiError> {
    let job = state.jobs.create_job(body.into_inner())?;
    Ok(HttpResponse::Created().json(job))
}

/// PUT /jobs/{id}
pub async fn update_job(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<JobPayload>,
) -> Result<HttpResponse, ApiError> {
    let job = state.jobs.update_job(id.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(job))
}

/// DELETE /jobs/{id}
pub async fn delete_job(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    state.jobs.delete_job(id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Job deleted successfully" })))
}

/// GET /jobs/bucket/{bucket}?client=&date=
///
/// The drill-down list behind one dashboard counter.
pub async fn bucket_jobs(
    state: web::Data<AppState>,
    bucket: web::Path<String>,
    params: web::Query<JobFilterParams>,
) -> Result<HttpResponse, ApiError> {
    let bucket: JobBucket = bucket.parse()?;
    let jobs = state.jobs.list_jobs(&params.to_query()?)?;
    Ok(HttpResponse::Ok().json(filter_by_bucket(&jobs, bucket)))
}
