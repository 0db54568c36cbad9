//! Value objects representing immutable domain concepts.

pub mod auth_outcome;
pub mod inputs;
pub mod listing;

// Re-export commonly used types
pub use auth_outcome::AuthOutcome;
pub use inputs::{LoginInput, MovieInput, ProfileInput, RegisterInput};
pub use listing::{ListQuery, Page};
