//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod property;
pub mod user;

pub use property::{MockPropertyRepository, PropertyRepository};
pub use user::{MockUserRepository, UserRepository};
