//! Catalog service module for movie CRUD and listing

mod service;

#[cfg(test)]
mod tests;

pub use service::CatalogService;
