use crate::config::Settings;
use crate::models::ServiceInfo;
use actix_web::{HttpResponse, Responder, get, web};

/// # Root Endpoint
///
/// Basic service information: name, version, a `"running"` status and links
/// to the documentation and health endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    ),
    tag = "Service"
)]
#[get("/")]
pub async fn root(settings: web::Data<Settings>) -> impl Responder {
    tracing::info!("Root endpoint accessed");
    HttpResponse::Ok().json(ServiceInfo::running(&settings))
}
