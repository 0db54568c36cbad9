//! Shared utilities and common types for the Reelbase server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types and the layered configuration loader
//! - Wire-level response envelopes
//! - Pagination parameters for list endpoints

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, LogFormat,
    LoggingConfig, ServerConfig,
};
pub use crate::types::{ApiResponse, ErrorResponse, HealthResponse, Pagination};
