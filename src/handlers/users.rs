//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 활성 사용자 목록 (`?page=&limit=` 선택) | 200 OK |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 (비활성 포함) | 200 OK |
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `PATCH` | `/api/v1/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/v1/users/{id}` | 소프트 삭제 | 204 No Content |
//!
//! ID 형식이 잘못된 경우도 존재하지 않는 ID와 같이 404로 응답합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::domain::dto::users::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::domain::dto::users::response::{UserData, UserListing, UsersData};
use crate::domain::models::RequestContext;
use crate::errors::AppError;
use crate::services::users::UserService;
use crate::utils::api_response::ApiResponse;
use crate::validation::Valid;

/// 활성 사용자 목록
///
/// ```json
/// { "status": "success", "message": "Users retrieved successfully", "results": 2, "data": { "users": [ ... ] } }
/// ```
///
/// `page` 또는 `limit`이 주어지면 `data.pagination`이 추가됩니다.
#[get("")]
pub async fn list_users(
    ctx: RequestContext,
    service: web::Data<UserService>,
    query: Valid<web::Query<ListUsersQuery>>,
) -> Result<HttpResponse, AppError> {
    let page = query.page_request();
    let result = service.list_users(page).await?;
    let count = result.users.len();

    ctx.debug(format_args!("📋 사용자 목록 조회: {}건", count));

    let message = "Users retrieved successfully";
    Ok(match result.pagination {
        Some(pagination) => ApiResponse::success_with_results(
            message,
            count,
            UserListing {
                users: result.users,
                pagination,
            },
        ),
        None => ApiResponse::success_with_results(message, count, UsersData { users: result.users }),
    })
}

/// 사용자 조회 핸들러
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(ApiResponse::success(
        actix_web::http::StatusCode::OK,
        "User retrieved successfully",
        Some(UserData { user }),
    ))
}

/// 사용자 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:3000/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane Doe","email":"jane@example.com","role":"admin"}'
/// ```
///
/// 이메일이 이미 사용 중이면 400 `Duplicate field value: "..."`를 반환합니다.
#[post("")]
pub async fn create_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    payload: Valid<web::Json<CreateUserRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().into_inner();
    let user = service.create_user(request).await?;

    ctx.info(format_args!("👤 사용자 생성 완료: {}", user.id));

    Ok(ApiResponse::created("User created successfully", UserData { user }))
}

#[patch("/{user_id}")]
pub async fn update_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: Valid<web::Json<UpdateUserRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner().into_inner();
    let user = service.update_user(&user_id, request).await?;

    ctx.info(format_args!("✏️ 사용자 수정 완료: {}", user.id));

    Ok(ApiResponse::success(
        actix_web::http::StatusCode::OK,
        "User updated successfully",
        Some(UserData { user }),
    ))
}

/// 사용자 삭제 핸들러 (소프트 삭제)
///
/// 사용자는 `active: false`로 표시될 뿐 물리적으로 제거되지 않습니다.
/// 이미 비활성화된 사용자를 다시 삭제하면 404입니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    ctx: RequestContext,
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    ctx.info(format_args!("🗑️ 사용자 비활성화: {}", user_id.as_str()));

    Ok(ApiResponse::<()>::no_content())
}
