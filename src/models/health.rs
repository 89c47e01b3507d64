use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Settings;

/// Status reported by a service that can answer requests.
pub const HEALTHY: &str = "healthy";

/// # Health Status Response
///
/// Reports that the service is alive together with its identity.
/// Built fresh for every health check; the timestamp is never reused.
///
/// ## Fields
/// - `status`: always `"healthy"` while the process can serve requests
/// - `timestamp`: UTC time at which the check was handled
/// - `service`: configured service name
/// - `version`: configured service version
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
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "Service Name")]
    pub service: String,
    #[schema(example = "v0.0.1")]
    pub version: String,
}

impl HealthStatus {
    pub fn healthy(settings: &Settings) -> Self {
        Self::healthy_at(settings, Utc::now())
    }

    pub fn healthy_at(settings: &Settings, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp,
            service: settings.service_name.clone(),
            version: settings.service_version.clone(),
        }
    }
}
