//! Type definitions module
//!
//! - `pagination` - Page/limit parameters for list endpoints
//! - `response` - Uniform JSON envelopes and health checks

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use response::{ApiResponse, ErrorResponse, HealthResponse};
