use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Settings;

pub const RUNNING: &str = "running";
pub const DOCS_PATH: &str = "/docs";
pub const HEALTH_PATH: &str = "/health";

/// Service metadata returned from the root endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Service Name")]
    pub service: String,
    #[schema(example = "v0.0.1")]
    pub version: String,
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "/docs")]
    pub docs: String,
    pub endpoints: Endpoints,
}

/// Links to the endpoints the service exposes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Endpoints {
    #[schema(example = "/health")]
    pub health: String,
}

impl ServiceInfo {
    pub fn running(settings: &Settings) -> Self {
        Self {
            service: settings.service_name.clone(),
            version: settings.service_version.clone(),
            status: RUNNING.to_string(),
            docs: DOCS_PATH.to_string(),
            endpoints: Endpoints {
                health: HEALTH_PATH.to_string(),
            },
        }
    }
}
