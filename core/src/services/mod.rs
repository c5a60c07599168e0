//! Business services built on top of the domain and repository layers.

pub mod access;
pub mod property;
pub mod token;
pub mod users;

pub use access::{AccessPolicy, AuthenticatedIdentity, RoleResolver};
pub use property::PropertyLifecycleService;
pub use token::TokenService;
pub use users::{Registration, UserDirectory};
