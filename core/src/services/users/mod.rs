//! User directory service module
//!
//! Registration and administrative user management (role grants,
//! listing, deletion).

mod directory;


pub use directory::{Registration, UserDirectory};
