//! Route table.

use actix_web::http::Method;
use actix_web::{web, HttpResponse, Resource};
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::{clients, employees, health, jobs, reports, stats};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid path parameter: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid query string: {}", err)).into()
    }))
    .service(
        resource("/clients")
            .route(web::get().to(clients::list_clients))
            .route(web::post().to(clients::add_client)),
    )
    .service(resource("/employees").route(web::get().to(employees::list_employees)))
    .service(resource("/employees/{name}/jobs").route(web::get().to(employees::employee_jobs)))
    .service(
        resource("/jobs")
            .route(web::get().to(jobs::list_jobs))
            .route(web::post().to(jobs::create_job)),
    )
    .service(resource("/jobs/bucket/{bucket}").route(web::get().to(jobs::bucket_jobs)))
    .service(
        resource("/jobs/{id}")
            .route(web::get().to(jobs::get_job))
            .route(web::put().to(jobs::update_job))
            .route(web::delete().to(jobs::delete_job)),
    )
    .service(resource("/stats").route(web::get().to(stats::overview)))
    .service(resource("/stats/employees").route(web::get().to(stats::by_employee)))
    .service(resource("/stats/clients").route(web::get().to(stats::by_client)))
    .service(resource("/reports").route(web::get().to(reports::job_report)))
    .service(resource("/healthz").route(web::get().to(health::healthz)));
}

/// A resource that answers bare `OPTIONS` and turns unsupported methods into 404.
fn resource(path: &str) -> Resource {
    web::resource(path)
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(not_found))
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Fallback for anything the route table does not serve.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
