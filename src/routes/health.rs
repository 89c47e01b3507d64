use crate::config::Settings;
use crate::models::HealthStatus;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Reports that the service is alive, with the time of the check and the
/// configured service name and version. Downstream dependencies are not
/// probed.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `timestamp` (ISO 8601, UTC),
///     `service` and `version`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-12-30T20:12:25.673396Z",
///   "service": "Service Name",
///   "version": "v0.0.1"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(settings: web::Data<Settings>) -> impl Responder {
    let health_status = HealthStatus::healthy(&settings);
    tracing::info!(
        status = %health_status.status,
        timestamp = %health_status.timestamp,
        service = %health_status.service,
        version = %health_status.version,
        "Health check response"
    );

    HttpResponse::Ok().json(health_status)
}
