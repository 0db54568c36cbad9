pub mod account;
pub mod movie;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use movie::{InMemoryMovieRepository, MovieRepository};
