//! Unit tests for catalog service

use std::sync::Arc;

use rb_shared::Pagination;

use crate::domain::value_objects::{ListQuery, MovieInput};
use crate::errors::DomainError;
use crate::repositories::InMemoryMovieRepository;
use crate::services::catalog::CatalogService;
use crate::services::validation::InputValidator;

fn service() -> (Arc<InMemoryMovieRepository>, CatalogService<InMemoryMovieRepository>) {
    let repository = Arc::new(InMemoryMovieRepository::new());
    let service = CatalogService::new(repository.clone(), InputValidator::new());
    (repository, service)
}

fn dune() -> MovieInput {
    MovieInput {
        title: "Dune".to_string(),
        year: 2021,
        genre: "scifi".to_string(),
        rating: 8.0,
        director: "Denis".to_string(),
    }
}

fn titled(title: &str) -> MovieInput {
    MovieInput {
        title: title.to_string(),
        ..dune()
    }
}

#[tokio::test]
async fn test_create_then_get() {
    let (_, service) = service();

    let id = service.create(dune()).await.unwrap();
    let movie = service.get(id).await.unwrap();

    assert_eq!(id, 1);
    assert_eq!(movie.title, "Dune");
    assert_eq!(movie.year, 2021);
    assert_eq!(movie.genre, "scifi");
    assert_eq!(movie.rating, 8.0);
    assert_eq!(movie.director, "Denis");
}

#[tokio::test]
async fn test_invalid_input_never_reaches_storage() {
    let (repository, service) = service();

    let result = service
        .create(MovieInput {
            year: 1700,
            ..dune()
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_duplicate_title() {
    let (_, service) = service();
    service.create(dune()).await.unwrap();

    let result = service.create(dune()).await;
    assert!(matches!(result, Err(DomainError::Duplicate { .. })));
}

#[tokio::test]
async fn test_update_merges_path_id_with_body() {
    let (_, service) = service();
    let id = service.create(dune()).await.unwrap();

    let updated = service
        .update(
            id,
            MovieInput {
                rating: 9.0,
                ..dune()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, id);
    assert_eq!(service.get(id).await.unwrap().rating, 9.0);
}

#[tokio::test]
async fn test_update_missing_movie_is_not_found() {
    let (_, service) = service();

    let result = service.update(42, dune()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_invalid_body_leaves_row_untouched() {
    let (_, service) = service();
    let id = service.create(dune()).await.unwrap();

    let result = service.update(id, titled("D")).await;

    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert_eq!(service.get(id).await.unwrap().title, "Dune");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_, service) = service();
    let id = service.create(dune()).await.unwrap();

    assert_eq!(service.delete(id).await.unwrap(), id);
    assert!(matches!(service.get(id).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.delete(id).await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_non_positive_ids_are_validation_errors() {
    let (_, service) = service();

    assert!(matches!(service.get(0).await, Err(DomainError::Validation { .. })));
    assert!(matches!(service.delete(-1).await, Err(DomainError::Validation { .. })));
    assert!(matches!(
        service.update(0, dune()).await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_list_pages_newest_first() {
    let (_, service) = service();
    for title in ["Alien", "Blade Runner", "Contact"] {
        service.create(titled(title)).await.unwrap();
    }

    let page = service
        .list(ListQuery::new(None, Pagination::new(2, 1)))
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Blade Runner");
}

#[tokio::test]
async fn test_list_search_keeps_unfiltered_total() {
    let (_, service) = service();
    for title in ["Alien", "Aliens", "Contact"] {
        service.create(titled(title)).await.unwrap();
    }

    let page = service
        .list(ListQuery::new(Some("alien".to_string()), Pagination::default()))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_list_zero_window_uses_default_page() {
    let (_, service) = service();
    for n in 0..12 {
        service.create(titled(&format!("Movie {}", n))).await.unwrap();
    }

    let page = service
        .list(ListQuery::new(None, Pagination { page: 0, limit: 0 }))
        .await
        .unwrap();

    assert_eq!(page.total, 12);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].title, "Movie 11");
}
