//! # Domain Entities Module
//!
//! MongoDB 컬렉션에 저장되는 엔티티를 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통해 문서와 자동 변환
//! - **ObjectId 지원**: `_id` 필드와 매핑, 저장 전에는 `None`
//! - **재검증**: 저장 직전 `validator` 규칙을 한 번 더 적용
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: bson::DateTime` |
//! | Bean Validation | `#[derive(Validate)]` |

pub mod users;

pub use users::*;
