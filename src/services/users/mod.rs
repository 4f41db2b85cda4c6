//! 사용자 관리 서비스
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MongoUserRepository::new(&database)));
//! let user = service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::{UserListResult, UserService};
