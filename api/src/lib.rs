//! # Reelbase API
//!
//! actix-web surface for the Reelbase backend: route handlers, the JWT gate
//! for catalog mutations, and the mapping from domain failures to JSON
//! envelopes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
