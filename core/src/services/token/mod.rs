//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - HS256 access and refresh token issuance
//! - Token verification with clock-based expiry

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
