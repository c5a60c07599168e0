//! Property routes: submission, agent listings, and admin lifecycle

pub mod agent_properties;
pub mod lifecycle;
pub mod submit;

pub use agent_properties::agent_properties;
pub use lifecycle::{advertise_property, reject_property, unadvertise_property, verify_property};
pub use submit::submit_property;
