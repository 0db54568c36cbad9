//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application. The factory is generic over the
//! repositories and hasher so tests can wire in-memory gateways.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
    web, App, Error, HttpResponse,
};

use rb_core::repositories::{AccountRepository, MovieRepository};
use rb_core::services::{AccountService, CatalogService, PasswordHasher, TokenService};

use crate::handlers::error_response;
use crate::middleware::JwtAuth;
use crate::routes::{health, movies, users};

/// Application state that holds shared services
pub struct AppState<A, H, M>
where
    A: AccountRepository,
    H: PasswordHasher,
    M: MovieRepository,
{
    pub accounts: Arc<AccountService<A, H>>,
    pub catalog: Arc<CatalogService<M>>,
    pub tokens: Arc<TokenService>,
}

impl<A, H, M> AppState<A, H, M>
where
    A: AccountRepository,
    H: PasswordHasher,
    M: MovieRepository,
{
    pub fn new(
        accounts: Arc<AccountService<A, H>>,
        catalog: Arc<CatalogService<M>>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            accounts,
            catalog,
            tokens,
        }
    }
}

/// Create and configure the application with all dependencies
///
/// Transport-level middleware (request tracing, CORS) is left to the caller
/// so that `main` and the tests can wrap the same routes differently.
pub fn create_app<A, H, M>(
    app_state: web::Data<AppState<A, H, M>>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let auth = JwtAuth::new(Arc::clone(&app_state.tokens));

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config(max_payload_size))
        .app_data(path_config())
        .app_data(query_config())
        // Health check endpoint
        .route("/health", web::get().to(health::health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(users::register::<A, H, M>))
                        .route("/login", web::post().to(users::login::<A, H, M>)),
                )
                .service(
                    web::resource("/movies")
                        .route(web::get().to(movies::list_movies::<A, H, M>))
                        .route(
                            web::post()
                                .to(movies::create_movie::<A, H, M>)
                                .wrap(auth.clone()),
                        ),
                )
                .service(
                    web::resource("/movies/{id}")
                        .route(web::get().to(movies::get_movie::<A, H, M>))
                        .route(
                            web::put()
                                .to(movies::update_movie::<A, H, M>)
                                .wrap(auth.clone()),
                        )
                        .route(
                            web::delete()
                                .to(movies::delete_movie::<A, H, M>)
                                .wrap(auth),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Undecodable or oversized JSON bodies answer the standard envelope
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST, "Invalid body"))
            .into()
    })
}

/// Non-numeric path ids answer the standard envelope
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            error_response(StatusCode::BAD_REQUEST, "Invalid movie id"),
        )
        .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            error_response(StatusCode::BAD_REQUEST, "Invalid query"),
        )
        .into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "The requested resource was not found")
}
