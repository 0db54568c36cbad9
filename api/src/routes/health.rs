use actix_web::HttpResponse;
use rb_shared::HealthResponse;

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("reelbase-api", env!("CARGO_PKG_VERSION")))
}
