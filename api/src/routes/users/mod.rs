//! User routes: registration, self role checks, and admin management

pub mod delete;
pub mod grant_role;
pub mod list;
pub mod register;
pub mod role_check;

pub use delete::delete_user;
pub use grant_role::{grant_admin, grant_agent};
pub use list::list_users;
pub use register::register;
pub use role_check::{check_admin, check_agent};
