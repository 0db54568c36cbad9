//! Route handlers
//!
//! - `health`: liveness probe
//! - `users`: registration and login
//! - `movies`: catalog CRUD and listing

pub mod health;
pub mod movies;
pub mod users;
