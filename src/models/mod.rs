/// # Health Status Response
///
/// Liveness payload served from `GET /health`: a fixed `"healthy"` status,
/// the UTC time the check was handled, and the service name and version.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-12-30T20:12:25.673396Z",
///   "service": "Service Name",
///   "version": "v0.0.1"
/// }
/// ```
pub mod health;

/// Service metadata served from `GET /`.
pub mod service;

pub use health::HealthStatus;
pub use service::{Endpoints, ServiceInfo};
