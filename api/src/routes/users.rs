//! Account endpoints: registration and login

use actix_web::{http::StatusCode, web, HttpResponse};

use rb_core::domain::value_objects::{LoginInput, RegisterInput};
use rb_core::repositories::{AccountRepository, MovieRepository};
use rb_core::services::PasswordHasher;

use crate::app::AppState;
use crate::dto::AuthResponse;
use crate::handlers::ApiResult;

/// Handler for POST /api/v1/users/register
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Ada",
///     "last_name": "Lovelace",
///     "email": "ada@example.com",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `access_token`, `refresh_token`, `status`, `message` and
/// the new account `id`. A taken email answers `400 "Already exists"`.
pub async fn register<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    body: web::Json<RegisterInput>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let outcome = state.accounts.register(body.into_inner()).await?;

    let status = StatusCode::CREATED;
    Ok(HttpResponse::build(status).json(AuthResponse::new(
        outcome,
        status.as_u16(),
        "User created successfully",
    )))
}

/// Handler for POST /api/v1/users/login
///
/// Unknown email and wrong password both answer `400 "Wrong email or password"`.
pub async fn login<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    body: web::Json<LoginInput>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let outcome = state.accounts.login(body.into_inner()).await?;

    let status = StatusCode::OK;
    Ok(HttpResponse::build(status).json(AuthResponse::new(
        outcome,
        status.as_u16(),
        "User logged in successfully",
    )))
}
