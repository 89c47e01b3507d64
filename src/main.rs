use std::process::ExitCode;

use actix_web::{App, HttpServer, middleware::from_fn, web::Data};
use service_scaffold::config::Settings;
use service_scaffold::error::StartupError;
use service_scaffold::lifespan::Lifespan;
use service_scaffold::middleware::request_span;
use service_scaffold::openapi::{ApiDoc, redoc, swagger_ui};
use service_scaffold::telemetry::LogHandle;
use service_scaffold::{routes, telemetry};

/// Service Entry Point
///
/// Resolves [`Settings`] from the environment and env files, then launches
/// the Actix-web HTTP server on the configured host and port with:
/// - `GET /` service metadata and `GET /health` liveness endpoints
/// - Swagger UI at `/docs/` backed by `/openapi.json`, and ReDoc at `/redoc`
/// - Per-request tracing spans with a generated request ID
///
/// # Exit Codes
/// - `0` after a signal-triggered graceful shutdown
/// - `1` when configuration cannot be resolved or the listener cannot bind
#[actix_web::main]
async fn main() -> ExitCode {
    let log_handle = telemetry::init();

    match run(log_handle).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Service failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(log_handle: LogHandle) -> Result<(), StartupError> {
    let settings = Settings::load()?;
    log_handle.apply(settings.log_level)?;

    let mut lifespan = Lifespan::start(&settings);

    let openapi = ApiDoc::for_service(&settings);
    let bind_addr = (settings.host.clone(), settings.port);
    let settings = Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .wrap(from_fn(request_span))
            .configure(routes::configure)
            .service(swagger_ui(openapi.clone()))
            .service(redoc(openapi.clone()))
    })
    .bind(bind_addr)?;

    lifespan.serving(&server.addrs());
    server.run().await?;

    Ok(())
}
