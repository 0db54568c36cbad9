//! Catalog endpoints
//!
//! Reads are public. Create, update and delete sit behind [`JwtAuth`], which
//! binds an [`AuthContext`]; the identity is logged but any authenticated
//! account may change any movie.
//!
//! [`JwtAuth`]: crate::middleware::JwtAuth

use actix_web::{http::StatusCode, web, HttpResponse};

use rb_core::domain::entities::Movie;
use rb_core::domain::value_objects::MovieInput;
use rb_core::repositories::{AccountRepository, MovieRepository};
use rb_core::services::PasswordHasher;
use rb_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::ListMoviesQuery;
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;

/// Handler for GET /api/v1/movies?page=&limit=&search=
///
/// `total` in the response counts every stored movie, not only the matches.
pub async fn list_movies<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    query: web::Query<ListMoviesQuery>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let page = state.catalog.list(query.into_inner().into_list_query()).await?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::with_data(StatusCode::OK.as_u16(), "Movies fetched successfully", page.items)
            .with_total(page.total),
    ))
}

/// Handler for GET /api/v1/movies/{id}
pub async fn get_movie<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let movie = state.catalog.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(
        StatusCode::OK.as_u16(),
        "Movie fetched successfully",
        movie,
    )))
}

/// Handler for POST /api/v1/movies
pub async fn create_movie<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    auth: AuthContext,
    body: web::Json<MovieInput>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let id = state.catalog.create(body.into_inner()).await?;
    tracing::info!(account_id = auth.account_id, movie_id = id, "Movie created via API");

    let status = StatusCode::CREATED;
    Ok(HttpResponse::build(status)
        .json(ApiResponse::<Movie>::message(status.as_u16(), "Movie created successfully").with_id(id)))
}

/// Handler for PUT /api/v1/movies/{id}
pub async fn update_movie<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    auth: AuthContext,
    path: web::Path<i64>,
    body: web::Json<MovieInput>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let id = state.catalog.update(path.into_inner(), body.into_inner()).await?;
    tracing::info!(account_id = auth.account_id, movie_id = id, "Movie updated via API");

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<Movie>::message(StatusCode::OK.as_u16(), "Movie updated successfully").with_id(id)))
}

/// Handler for DELETE /api/v1/movies/{id}
pub async fn delete_movie<A, H, M>(
    state: web::Data<AppState<A, H, M>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse>
where
    A: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    M: MovieRepository + 'static,
{
    let id = state.catalog.delete(path.into_inner()).await?;
    tracing::info!(account_id = auth.account_id, movie_id = id, "Movie deleted via API");

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<Movie>::message(StatusCode::OK.as_u16(), "Movie deleted successfully").with_id(id)))
}
