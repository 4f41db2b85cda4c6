//! 데이터 액세스 계층
//!
//! 서비스는 [`users::UserRepository`] trait에만 의존하고,
//! 실행 시에는 MongoDB 구현이, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! repo.create_indexes().await?;
//! ```

pub mod users;
