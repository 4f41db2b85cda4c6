//! Users Entity Module
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Role, User};
//!
//! let user = User::new("Jane Doe", "Jane@Example.com", Role::User);
//! assert_eq!(user.email, "jane@example.com");
//! assert!(user.active);
//! ```

pub mod user;

pub use user::*;
