//! End-to-end tests for the HTTP surface, wired with in-memory gateways

use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, web};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use rb_api::{create_app, AppState};
use rb_core::{
    AccountService, BcryptPasswordHasher, CatalogService, FixedClock, InMemoryAccountRepository,
    InMemoryMovieRepository, InputValidator, TokenService, TokenServiceConfig,
};

const SECRET: &str = "api-test-secret";
const PAYLOAD_LIMIT: usize = 256 * 1024;

type TestState = AppState<InMemoryAccountRepository, BcryptPasswordHasher, InMemoryMovieRepository>;

struct Fixture {
    state: web::Data<TestState>,
    movies: Arc<InMemoryMovieRepository>,
}

fn fixture() -> Fixture {
    let validator = InputValidator::new();
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(SECRET)));
    let movies = Arc::new(InMemoryMovieRepository::new());

    let accounts = Arc::new(AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::clone(&tokens),
        validator,
    ));
    let catalog = Arc::new(CatalogService::new(Arc::clone(&movies), validator));

    Fixture {
        state: web::Data::new(AppState::new(accounts, catalog, tokens)),
        movies,
    }
}

fn register_body() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "password": "secret1"
    })
}

fn movie_body(title: &str) -> Value {
    json!({
        "title": title,
        "year": 2021,
        "genre": "Sci-Fi",
        "rating": 8.1,
        "director": "Denis Villeneuve"
    })
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_account_and_catalog_flow() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], 201);
    assert_eq!(body["message"], "User created successfully");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["refresh_token"].as_str().is_some_and(|t| !t.is_empty()));

    // Wrong password
    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "ada@example.com", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Wrong email or password");

    // Login
    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "ada@example.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["message"], "User logged in successfully");
    let access_token = body["access_token"].as_str().unwrap().to_string();

    // Create without a token
    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .set_json(movie_body("Dune"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Authorization header is required");
    assert!(fx.movies.is_empty().await);

    // Create with a token
    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .insert_header(bearer(&access_token))
        .set_json(movie_body("Dune"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Movie created successfully");
    let id = body["id"].as_i64().unwrap();

    // Read it back
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/movies/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Movie fetched successfully");
    assert_eq!(body["data"]["title"], "Dune");

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/movies/{}", id))
        .insert_header(bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Movie deleted successfully");

    // Gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/movies/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Movie not found");
}

#[actix_web::test]
async fn test_duplicate_email_is_rejected() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;

    for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/v1/users/register")
            .set_json(register_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
        if expected == StatusCode::BAD_REQUEST {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Already exists");
        }
    }
}

#[actix_web::test]
async fn test_invalid_movie_is_not_stored() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;
    let token = fx.state.tokens.issue_pair(1).unwrap().access_token;

    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "D",
            "year": 1700,
            "genre": "Sci-Fi",
            "rating": 11.0,
            "director": "Denis Villeneuve"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(message.contains("year"));
    assert!(message.contains("rating"));
    assert!(fx.movies.is_empty().await);
}

#[actix_web::test]
async fn test_listing_paginates_and_reports_total() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;
    let token = fx.state.tokens.issue_pair(1).unwrap().access_token;

    for title in ["Dune", "Dune: Part Two", "Arrival"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/movies")
            .insert_header(bearer(&token))
            .set_json(movie_body(title))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/movies?page=2&limit=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Movies fetched successfully");
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Invalid paging values fall back to page 1, limit 10
    let req = test::TestRequest::get()
        .uri("/api/v1/movies?page=abc&limit=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Search narrows the window but not the total
    let req = test::TestRequest::get()
        .uri("/api/v1/movies?search=DUNE")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.iter().all(|t| t.starts_with("Dune")));
    assert_eq!(body["total"], 3);
}

#[actix_web::test]
async fn test_update_replaces_movie() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;
    let token = fx.state.tokens.issue_pair(1).unwrap().access_token;

    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .insert_header(bearer(&token))
        .set_json(movie_body("Dune"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/movies/{}", id))
        .insert_header(bearer(&token))
        .set_json(movie_body("Dune (1984)"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Movie updated successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/movies/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "Dune (1984)");

    let req = test::TestRequest::put()
        .uri("/api/v1/movies/999")
        .insert_header(bearer(&token))
        .set_json(movie_body("Nothing"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_token_failures() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;

    // Issued two hours ago with the default 30 minute lifetime
    let past = Utc::now() - Duration::hours(2);
    let stale = TokenService::with_clock(
        TokenServiceConfig::new(SECRET),
        Arc::new(FixedClock::new(past)),
    );
    let expired = stale.issue_pair(1).unwrap().access_token;

    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .insert_header(bearer(&expired))
        .set_json(movie_body("Dune"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token is expired");

    let forged = TokenService::new(TokenServiceConfig::new("some-other-secret"))
        .issue_pair(1)
        .unwrap()
        .access_token;
    let req = test::TestRequest::delete()
        .uri("/api/v1/movies/1")
        .insert_header(bearer(&forged))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");

    // A raw token without the Bearer prefix is accepted
    let valid = fx.state.tokens.issue_pair(1).unwrap().access_token;
    let req = test::TestRequest::post()
        .uri("/api/v1/movies")
        .insert_header((header::AUTHORIZATION, valid))
        .set_json(movie_body("Dune"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_malformed_requests() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid body");

    let req = test::TestRequest::get().uri("/api/v1/movies/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid movie id");

    let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_check() {
    let fx = fixture();
    let app = test::init_service(create_app(fx.state.clone(), PAYLOAD_LIMIT)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "reelbase-api");
}
