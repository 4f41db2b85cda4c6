//! MongoDB 기반 사용자 리포지토리

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::{User, UserPatch};
use crate::domain::models::pagination::PageRequest;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }
}

/// 부분 수정 내용을 `$set` 문서로 변환합니다. `updated_at`은 항상 포함됩니다.
fn set_document(patch: &UserPatch) -> Document {
    let mut set = doc! { "updated_at": DateTime::now() };

    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(email) = &patch.email {
        set.insert("email", email.as_str());
    }
    if let Some(role) = patch.role {
        set.insert("role", role.as_str());
    }
    if let Some(active) = patch.active {
        set.insert("active", active);
    }
    set
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_active(&self, page: Option<PageRequest>) -> AppResult<Vec<User>> {
        let mut find = self
            .collection
            .find(doc! { "active": true })
            .sort(doc! { "created_at": 1 });

        if let Some(page) = page {
            find = find.skip(page.skip()).limit(page.limit as i64);
        }

        let users = find.await?.try_collect::<Vec<User>>().await?;
        Ok(users)
    }

    async fn count_active(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! { "active": true }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("inserted id is not an ObjectId".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update(&self, id: &ObjectId, patch: &UserPatch) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_document(patch) })
            .with_options(options)
            .await?;

        Ok(updated)
    }

    async fn deactivate(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id, "active": true },
                doc! { "$set": { "active": false, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    /// 이메일 유니크 인덱스와 목록 조회용 인덱스를 생성합니다.
    ///
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let active_index = IndexModel::builder()
            .keys(doc! { "active": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("active_created_at".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, active_index])
            .await?;

        info!("📇 users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}
