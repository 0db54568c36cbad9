//! Business services containing domain logic and use cases.

pub mod account;
pub mod catalog;
pub mod password;
pub mod token;
pub mod validation;

// Re-export commonly used types
pub use account::AccountService;
pub use catalog::CatalogService;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
pub use validation::InputValidator;
