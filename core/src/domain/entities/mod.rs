//! Domain entities representing core business objects.

pub mod account;
pub mod movie;
pub mod token;

// Re-export commonly used types
pub use account::{Account, AccountProfile, NewAccount};
pub use movie::{Movie, MovieDraft};
pub use token::{Claims, TokenPair, JWT_ISSUER};
