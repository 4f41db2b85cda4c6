//! 테스트용 메모리 리포지토리
//!
//! MongoDB 없이 서비스와 HTTP 계층을 검증하기 위해 사용합니다.
//! 이메일 유니크 제약은 MongoDB 인덱스와 같은 방식으로 흉내 냅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::users::{User, UserPatch};
use crate::domain::models::pagination::PageRequest;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<R>(&self, f: impl FnOnce(&mut Vec<User>) -> AppResult<R>) -> AppResult<R> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| AppError::InternalError("user store lock poisoned".to_string()))?;
        f(&mut users)
    }
}

fn email_taken(users: &[User], email: &str, except: Option<&ObjectId>) -> bool {
    users
        .iter()
        .any(|user| user.email == email && user.id.as_ref() != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_active(&self, page: Option<PageRequest>) -> AppResult<Vec<User>> {
        self.with_users(|users| {
            let active = users.iter().filter(|user| user.active).cloned();

            Ok(match page {
                Some(page) => active
                    .skip(page.skip() as usize)
                    .take(page.limit as usize)
                    .collect(),
                None => active.collect(),
            })
        })
    }

    async fn count_active(&self) -> AppResult<u64> {
        self.with_users(|users| Ok(users.iter().filter(|user| user.active).count() as u64))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.with_users(|users| Ok(users.iter().find(|user| user.id.as_ref() == Some(id)).cloned()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        self.with_users(|users| {
            if email_taken(users, &user.email, None) {
                return Err(AppError::DuplicateKey(user.email.clone()));
            }

            user.id = Some(ObjectId::new());
            users.push(user.clone());
            Ok(user)
        })
    }

    async fn update(&self, id: &ObjectId, patch: &UserPatch) -> AppResult<Option<User>> {
        self.with_users(|users| {
            if let Some(email) = &patch.email {
                if email_taken(users, email, Some(id)) {
                    return Err(AppError::DuplicateKey(email.clone()));
                }
            }

            Ok(users
                .iter_mut()
                .find(|user| user.id.as_ref() == Some(id))
                .map(|user| {
                    patch.apply_to(user);
                    user.clone()
                }))
        })
    }

    async fn deactivate(&self, id: &ObjectId) -> AppResult<bool> {
        self.with_users(|users| {
            match users
                .iter_mut()
                .find(|user| user.id.as_ref() == Some(id) && user.active)
            {
                Some(user) => {
                    user.active = false;
                    user.updated_at = DateTime::now();
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }
}
