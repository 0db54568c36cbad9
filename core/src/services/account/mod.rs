//! Account service module
//!
//! Registration, credential login with token issuance, and profile maintenance.

mod service;


pub use service::AccountService;
