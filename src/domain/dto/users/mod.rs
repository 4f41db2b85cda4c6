//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/   - CreateUserRequest, UpdateUserRequest, ListUsersQuery
//! └── response/  - UserResponse 및 응답 `data` 래퍼
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
