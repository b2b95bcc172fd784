//! Middleware constructors for the HTTP app.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::middleware;
use jobboard::config::ServerConfig;
use log::debug;

/// CORS policy: any origin unless `allowed_origins` names specific ones,
/// JSON content type, and the methods the API serves.
pub fn build_cors(config: &ServerConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
        debug!("CORS: Allowing any origin");
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: Allowed origins: {:?}", config.allowed_origins);
    }

    cors.allowed_methods(vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allowed_header(header::CONTENT_TYPE)
    .max_age(3600)
}

/// Access log for every request.
pub fn request_logger() -> middleware::Logger {
    middleware::Logger::default()
}
