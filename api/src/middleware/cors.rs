//! CORS middleware configuration for cross-origin requests.
//!
//! Built from [`CorsConfig`]; a `*` entry in `allowed_origins` allows any
//! origin, otherwise only the listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header::HeaderName, Method};
use rb_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
///
/// Unparseable method or header names are skipped with a warning.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|name| match name.parse::<Method>() {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::warn!(method = %name, "Ignoring invalid CORS method");
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|name| match HeaderName::try_from(name.as_str()) {
            Ok(header) => Some(header),
            Err(_) => {
                tracing::warn!(header = %name, "Ignoring invalid CORS header");
                None
            }
        })
        .collect();

    let mut cors = Cors::default()
        .allowed_methods(methods)
        .allowed_headers(headers)
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test as actix_test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_listed_origin_is_echoed() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.reelbase.test".to_string()],
            ..CorsConfig::default()
        };
        let app = actix_test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.reelbase.test"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.reelbase.test"
        );
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let config = CorsConfig {
            allowed_methods: vec!["GET".to_string(), "NOT A METHOD".to_string()],
            allowed_headers: vec!["Authorization".to_string(), "bad header".to_string()],
            ..CorsConfig::development()
        };
        let _cors = create_cors(&config);
    }
}
