#[cfg(test)]
mod application_tests {
    use crate::config::Settings;
    use crate::middleware::{REQUEST_ID_HEADER, request_span};
    use crate::openapi::{ApiDoc, redoc, swagger_ui};
    use crate::routes;
    use actix_web::{App, dev::ServiceResponse, middleware::from_fn, test, web::Data};
    use serde_json::{Value, json};
    use std::fs;
    use uuid::Uuid;

    fn app_settings(dir: &std::path::Path, vars: &[(&str, &str)]) -> Settings {
        Settings::resolve(vars.iter().copied(), dir).expect("settings should resolve")
    }

    fn request_id<B>(resp: &ServiceResponse<B>) -> Uuid {
        let value = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .expect("x-request-id header should be present")
            .to_str()
            .unwrap();
        Uuid::parse_str(value).expect("request id should be a UUID")
    }

    macro_rules! full_app {
        ($settings:expr) => {{
            let settings = $settings;
            let openapi = ApiDoc::for_service(&settings);
            test::init_service(
                App::new()
                    .app_data(Data::new(settings))
                    .wrap(from_fn(request_span))
                    .configure(routes::configure)
                    .service(swagger_ui(openapi.clone()))
                    .service(redoc(openapi)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_fresh_process_reports_default_identity() {
        let dir = tempfile::tempdir().unwrap();
        let app = full_app!(app_settings(dir.path(), &[]));

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "Service Name");
        assert_eq!(body["version"], "v0.0.1");
    }

    #[actix_web::test]
    async fn test_service_version_override_reaches_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = full_app!(app_settings(dir.path(), &[("SERVICE_VERSION", "v2.3.4")]));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["version"], "v2.3.4");
    }

    #[actix_web::test]
    async fn test_env_file_values_reach_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env.production"),
            "SERVICE_NAME=Billing\nSERVICE_VERSION=v3.0.0\n",
        )
        .unwrap();
        let app = full_app!(app_settings(dir.path(), &[("ENVIRONMENT", "production")]));

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({
                "service": "Billing",
                "version": "v3.0.0",
                "status": "running",
                "docs": "/docs",
                "endpoints": { "health": "/health" }
            })
        );
    }

    #[actix_web::test]
    async fn test_responses_carry_request_id() {
        let app = full_app!(Settings::default());

        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let second =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_ne!(request_id(&first), request_id(&second));
    }

    #[actix_web::test]
    async fn test_openapi_document_is_served() {
        let settings = Settings {
            service_name: "Billing".to_string(),
            service_version: "v2.3.4".to_string(),
            ..Settings::default()
        };
        let app = full_app!(settings);

        let req = test::TestRequest::get().uri("/openapi.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["info"]["title"], "Billing");
        assert_eq!(body["info"]["version"], "v2.3.4");
        assert!(body["paths"]["/health"]["get"].is_object());
        assert!(body["paths"]["/"]["get"].is_object());
    }

    #[actix_web::test]
    async fn test_docs_ui_is_served() {
        let app = full_app!(Settings::default());

        // The link advertised by the root endpoint has no trailing slash
        let req = test::TestRequest::get().uri("/docs").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_redirection());
        assert_eq!(
            resp.headers()
                .get("location")
                .expect("Location header should be present"),
            "/docs/"
        );

        let req = test::TestRequest::get().uri("/docs/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_redoc_is_served() {
        let settings = Settings {
            service_name: "Billing".to_string(),
            ..Settings::default()
        };
        let app = full_app!(settings);

        let req = test::TestRequest::get().uri("/redoc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).expect("Body should be valid UTF-8");
        assert!(html.contains("Billing"), "ReDoc page should embed the document");
    }
}
