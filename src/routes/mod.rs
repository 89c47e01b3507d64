use actix_web::web;

use crate::models::service::DOCS_PATH;
use crate::openapi::SWAGGER_UI_INDEX;

/// # Health Check Endpoint
///
/// `GET /health` returns the service status ("healthy"), the time of the
/// check, and the configured service name and version.
pub mod health;

/// # Root Endpoint
///
/// `GET /` returns service metadata and links to the other endpoints.
pub mod root;

/// # Route Configuration
///
/// Registers the service endpoints. Handlers expect a
/// `web::Data<Settings>` in the application data.
///
/// ## Endpoints
///
/// ```text
/// GET /       - Service metadata
/// GET /health - Service health status
/// GET /docs   - Redirect to the Swagger UI index at /docs/
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::root)
        .service(health::health)
        .service(web::redirect(DOCS_PATH, SWAGGER_UI_INDEX));
}
