//! Token issuance routes

pub mod issue_token;

pub use issue_token::issue_token;
