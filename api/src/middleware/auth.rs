//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware reads the token from the Authorization header, verifies it
//! with the core [`TokenService`], and injects an [`AuthContext`] into the
//! request extensions. Rejected calls are answered with the standard error
//! envelope and never reach the wrapped handler.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use rb_core::{
    domain::entities::Claims,
    errors::{AuthError, DomainError, TokenError},
    services::TokenService,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::{handle_domain_error, ApiError};

/// Authenticated identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Account id taken from the token subject
    pub account_id: i64,
    /// Instant the presented token stops being valid
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let account_id = claims.subject_id().ok_or(TokenError::Malformed)?;
        let expires_at = claims.expires_at().ok_or(TokenError::Malformed)?;
        Ok(Self {
            account_id,
            expires_at,
        })
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `tokens`
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let outcome = authorize(req.headers(), &self.tokens);

        Box::pin(async move {
            match outcome {
                Ok(context) => {
                    tracing::debug!(account_id = context.account_id, "Request authenticated");
                    req.extensions_mut().insert(context);
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(error) => {
                    let response = handle_domain_error(&error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts the token from the Authorization header
///
/// Both a bare token and `Bearer <token>` are accepted.
fn extract_token(headers: &HeaderMap) -> Result<&str, DomainError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| TokenError::Malformed)?
        .trim();

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken.into());
    }
    Ok(token)
}

fn authorize(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthContext, DomainError> {
    let token = extract_token(headers)?;
    let claims = tokens.verify(token)?;
    AuthContext::from_claims(&claims)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::MissingToken)).into());

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use rb_core::services::TokenServiceConfig;

    fn headers_with(value: &str) -> HeaderMap {
        actix_test::TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_srv_request()
            .headers()
            .clone()
    }

    #[test]
    fn test_extract_token() {
        let bearer = headers_with("Bearer test_token_123");
        assert_eq!(extract_token(&bearer).unwrap(), "test_token_123");

        let raw = headers_with("test_token_123");
        assert_eq!(extract_token(&raw).unwrap(), "test_token_123");

        let empty = headers_with("   ");
        assert_eq!(
            extract_token(&empty).unwrap_err(),
            DomainError::Auth(AuthError::MissingToken)
        );

        let missing = HeaderMap::new();
        assert_eq!(
            extract_token(&missing).unwrap_err(),
            DomainError::Auth(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_authorize_binds_subject() {
        let tokens = TokenService::new(TokenServiceConfig::new("middleware-test-secret"));
        let pair = tokens.issue_pair(42).unwrap();

        let headers = headers_with(&format!("Bearer {}", pair.access_token));
        let context = authorize(&headers, &tokens).unwrap();
        assert_eq!(context.account_id, 42);
        assert!(context.expires_at > Utc::now());
    }

    #[actix_web::test]
    async fn test_optional_auth_without_gate() {
        use actix_web::{web, App, HttpResponse};

        async fn whoami(auth: OptionalAuth) -> HttpResponse {
            match auth.0 {
                Some(context) => HttpResponse::Ok().body(context.account_id.to_string()),
                None => HttpResponse::Ok().body("anonymous"),
            }
        }

        let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("middleware-test-secret")));
        let access = tokens.issue_pair(7).unwrap().access_token;
        let app = actix_test::init_service(
            App::new()
                .route("/open", web::get().to(whoami))
                .route("/gated", web::get().to(whoami).wrap(JwtAuth::new(tokens))),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/open").to_request();
        assert_eq!(actix_test::call_and_read_body(&app, req).await, "anonymous");

        let req = actix_test::TestRequest::get()
            .uri("/gated")
            .insert_header((AUTHORIZATION, format!("Bearer {}", access)))
            .to_request();
        assert_eq!(actix_test::call_and_read_body(&app, req).await, "7");
    }

    #[actix_web::test]
    async fn test_ungated_auth_context_answers_envelope() {
        use actix_web::{http::StatusCode, web, App, HttpResponse};

        async fn whoami(auth: AuthContext) -> HttpResponse {
            HttpResponse::Ok().body(auth.account_id.to_string())
        }

        let app = actix_test::init_service(App::new().route("/me", web::get().to(whoami))).await;
        let req = actix_test::TestRequest::get().uri("/me").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["status"], 401);
        assert_eq!(body["message"], AuthError::MissingToken.to_string());
    }

    #[test]
    fn test_authorize_rejects_garbage() {
        let tokens = TokenService::new(TokenServiceConfig::new("middleware-test-secret"));
        let headers = headers_with("not-a-jwt");
        assert_eq!(
            authorize(&headers, &tokens).unwrap_err(),
            DomainError::Token(TokenError::Malformed)
        );
    }
}
