//! 사용자 데이터 액세스 계층
//!
//! 활성(`active: true`) 사용자만 목록에 나타나며, 삭제는 `active`를 내리는 것으로 처리됩니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::{User, UserPatch};
use crate::domain::models::pagination::PageRequest;
use crate::errors::AppResult;

pub mod user_repo;
#[cfg(test)]
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
#[cfg(test)]
pub use memory_repo::InMemoryUserRepository;

/// 사용자 저장소 포트
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 활성 사용자를 생성 순으로 조회합니다. `page`가 없으면 전체를 반환합니다.
    async fn find_active(&self, page: Option<PageRequest>) -> AppResult<Vec<User>>;

    async fn count_active(&self) -> AppResult<u64>;

    /// 활성 여부와 관계없이 ID로 조회합니다.
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 돌려줍니다.
    ///
    /// 이메일이 중복되면 `AppError::DuplicateKey`를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 제공된 필드만 변경하고 변경 후 문서를 돌려줍니다. 대상이 없으면 `None`.
    async fn update(&self, id: &ObjectId, patch: &UserPatch) -> AppResult<Option<User>>;

    /// 활성 사용자를 비활성화합니다. 대상이 없거나 이미 비활성이면 `false`.
    async fn deactivate(&self, id: &ObjectId) -> AppResult<bool>;

    /// 저장소가 요구하는 인덱스를 준비합니다.
    async fn create_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
