//! 사용자 CRUD 비즈니스 로직
//!
//! - 생성/수정 직전 엔티티 규칙으로 재검증합니다 (`InvalidData`).
//! - 형식이 잘못된 ID와 존재하지 않는 ID는 모두 `No user found with that ID`(404)입니다.
//! - 삭제는 소프트 삭제이며, 비활성 사용자는 목록에서 제외되지만 ID 조회로는 보입니다.

use std::sync::Arc;

use log::debug;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::UserPatch;
use crate::domain::models::pagination::{PageRequest, Pagination};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 목록 조회 결과. 페이지 요청이 있었던 경우에만 `pagination`이 채워집니다.
#[derive(Debug, Clone)]
pub struct UserListResult {
    pub users: Vec<UserResponse>,
    pub pagination: Option<Pagination>,
}

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 활성 사용자 목록
    pub async fn list_users(&self, page: Option<PageRequest>) -> AppResult<UserListResult> {
        let users = self.user_repo.find_active(page).await?;

        let pagination = match page {
            Some(page) => Some(Pagination::new(page, self.user_repo.count_active().await?)),
            None => None,
        };

        Ok(UserListResult {
            users: users.into_iter().map(UserResponse::from).collect(),
            pagination,
        })
    }

    /// ID로 사용자 조회 (비활성 사용자 포함)
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let object_id = parse_id(id)?;

        let user = self
            .user_repo
            .find_by_id(&object_id)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::InvalidData)` - 정규화 후 엔티티 규칙 위반
    /// * `Err(AppError::DuplicateKey)` - 이미 사용 중인 이메일
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = request.into_user();
        user.validate()?;

        let created = self.user_repo.insert(user).await?;
        debug!("👤 사용자 생성: {:?}", created.id_string());

        Ok(UserResponse::from(created))
    }

    /// 제공된 필드만 수정합니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let object_id = parse_id(id)?;

        let patch = UserPatch::try_from(request).map_err(|e| {
            AppError::InvalidData(vec![e
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "role is invalid".to_string())])
        })?;
        patch.validate()?;

        let updated = self
            .user_repo
            .update(&object_id, &patch)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        Ok(UserResponse::from(updated))
    }

    /// 소프트 삭제. 이미 비활성인 사용자도 404입니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let object_id = parse_id(id)?;

        if !self.user_repo.deactivate(&object_id).await? {
            return Err(AppError::user_not_found());
        }

        debug!("🗑️ 사용자 비활성화: {}", id);
        Ok(())
    }
}

fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::user_not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use crate::repositories::users::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: None,
        }
    }

    #[actix_web::test]
    async fn test_create_user_normalizes_and_activates() {
        let service = service();

        let user = service
            .create_user(request("  Jane ", "JANE@example.com"))
            .await
            .unwrap();

        assert_eq!(user.name, "Jane");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.role, Role::User);
        assert!(user.active);
        assert_eq!(user.id.len(), 24);
    }

    #[actix_web::test]
    async fn test_create_user_revalidates_entity() {
        let service = service();

        let err = service
            .create_user(request(&"x".repeat(101), "bad"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::InvalidData(vec![
                "Invalid email address".to_string(),
                "Name cannot exceed 100 characters".to_string(),
            ])
        );
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let service = service();
        service.create_user(request("Jane", "jane@example.com")).await.unwrap();

        let err = service
            .create_user(request("Other Jane", "Jane@Example.com"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::DuplicateKey("jane@example.com".to_string()));
    }

    #[actix_web::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let service = service();

        let missing = service.get_user_by_id(&ObjectId::new().to_hex()).await.unwrap_err();
        let malformed = service.get_user_by_id("not-an-id").await.unwrap_err();

        assert_eq!(missing, AppError::user_not_found());
        assert_eq!(malformed, AppError::user_not_found());
    }

    #[actix_web::test]
    async fn test_update_and_delete_of_missing_user_are_not_found() {
        let service = service();
        let missing_id = ObjectId::new().to_hex();

        let update = UpdateUserRequest {
            name: Some("Ghost".to_string()),
            ..UpdateUserRequest::default()
        };
        let updated = service.update_user(&missing_id, update).await.unwrap_err();
        let deleted = service.delete_user(&missing_id).await.unwrap_err();

        assert_eq!(updated, AppError::user_not_found());
        assert_eq!(deleted, AppError::user_not_found());
    }

    #[actix_web::test]
    async fn test_soft_delete_hides_user_from_list_only() {
        let service = service();
        let user = service.create_user(request("Jane", "jane@example.com")).await.unwrap();
        service.create_user(request("John", "john@example.com")).await.unwrap();

        service.delete_user(&user.id).await.unwrap();

        let listed = service.list_users(None).await.unwrap();
        assert_eq!(listed.users.len(), 1);
        assert!(listed.pagination.is_none());

        let fetched = service.get_user_by_id(&user.id).await.unwrap();
        assert!(!fetched.active);

        assert_eq!(service.delete_user(&user.id).await.unwrap_err(), AppError::user_not_found());
    }

    #[actix_web::test]
    async fn test_update_changes_only_given_fields() {
        let service = service();
        let user = service.create_user(request("Jane", "jane@example.com")).await.unwrap();

        let updated = service
            .update_user(
                &user.id,
                UpdateUserRequest {
                    role: Some("admin".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.name, "Jane");
        assert_eq!(updated.email, "jane@example.com");
    }

    #[actix_web::test]
    async fn test_update_can_reactivate() {
        let service = service();
        let user = service.create_user(request("Jane", "jane@example.com")).await.unwrap();
        service.delete_user(&user.id).await.unwrap();

        let restored = service
            .update_user(
                &user.id,
                UpdateUserRequest {
                    active: Some(true),
                    ..UpdateUserRequest::default()
                },
            )
            .await
            .unwrap();

        assert!(restored.active);
        assert_eq!(service.list_users(None).await.unwrap().users.len(), 1);
    }

    #[actix_web::test]
    async fn test_paginated_listing_reports_totals() {
        let service = service();
        for i in 0..5 {
            service
                .create_user(request(&format!("User {}", i), &format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let page = service.list_users(Some(PageRequest::new(2, 2))).await.unwrap();

        assert_eq!(page.users.len(), 2);
        assert_eq!(page.users[0].name, "User 2");
        assert_eq!(
            page.pagination,
            Some(Pagination {
                page: 2,
                limit: 2,
                total: 5,
                total_pages: 3,
            })
        );
    }
}
