//! Access-control services: identity, role resolution, and guards
//!
//! Route guards compose from two pieces: token verification yields an
//! [`AuthenticatedIdentity`], and [`AccessPolicy`] checks that identity
//! against roles resolved live from the user store. A role check cannot
//! be written without a verified identity in hand, which closes the
//! "role guard without an authentication guard" defect class at the
//! type level instead of by call-site convention.

mod identity;
mod policy;
mod resolver;

#[cfg(test)]
mod tests;

pub use identity::AuthenticatedIdentity;
pub use policy::AccessPolicy;
pub use resolver::RoleResolver;
