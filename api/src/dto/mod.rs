pub mod auth;
pub mod movie;

pub use auth::AuthResponse;
pub use movie::ListMoviesQuery;
