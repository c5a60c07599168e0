//! MySQL repository implementations

mod property_repository_impl;
mod user_repository_impl;

pub use property_repository_impl::MySqlPropertyRepository;
pub use user_repository_impl::MySqlUserRepository;
