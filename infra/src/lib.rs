//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the BengalBreeze
//! application. It provides the concrete MySQL implementations of the
//! repository interfaces defined in `bb_core`, plus connection-pool
//! bootstrap.
//!
//! Store-layer failures never leak `sqlx` types upward: every error is
//! mapped to `DomainError::Storage` at this boundary.

pub mod database;

pub use database::{
    create_pool, MySqlPropertyRepository, MySqlUserRepository,
};
