use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Settings;

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Index page of the Swagger UI; the bare `/docs` link redirects here.
pub const SWAGGER_UI_INDEX: &str = "/docs/";

pub const REDOC_PATH: &str = "/redoc";

/// OpenAPI Specification Documentation
///
/// Describes the service endpoints and payloads. The title, description and
/// version in `info` are placeholders replaced from [`Settings`] by
/// [`ApiDoc::for_service`], so the rendered docs always match the running
/// service.
///
/// # Endpoints
/// - Root: `GET /`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `ServiceInfo`, `Endpoints`: root payload
/// - `HealthStatus`: liveness payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::service::ServiceInfo,
            crate::models::service::Endpoints,
            crate::models::health::HealthStatus
        )
    ),
    tags(
        (name = "Service", description = "Service metadata"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn for_service(settings: &Settings) -> utoipa::openapi::OpenApi {
        let mut openapi = Self::openapi();
        openapi.info.title = settings.service_name.clone();
        openapi.info.version = settings.service_version.clone();
        openapi.info.description = Some(settings.service_description.clone());
        openapi
    }
}

/// Swagger UI mounted at `/docs/`, reading the document from [`OPENAPI_PATH`].
pub fn swagger_ui(openapi: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new("/docs/{_:.*}").url(OPENAPI_PATH, openapi)
}

/// ReDoc page at [`REDOC_PATH`] with the document embedded.
pub fn redoc(openapi: utoipa::openapi::OpenApi) -> Redoc<utoipa::openapi::OpenApi> {
    Redoc::with_url(REDOC_PATH, openapi)
}
