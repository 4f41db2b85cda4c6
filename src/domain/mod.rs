//! # Domain Layer Module
//!
//! 사용자 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 1:1로 대응하는 엔티티 (User, Role, UserPatch)
//! ├── dto       - HTTP 경계의 요청/응답 계약
//! └── models    - 요청 단위 값 객체 (RequestContext, 페이지네이션)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Entity` | `entities` 모듈 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 |
//! | `@Valid` | `validator::Validate` derive |
//! | MDC (Mapped Diagnostic Context) | `models::RequestContext` |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{Role, User, UserPatch};
pub use models::{PageRequest, Pagination, RequestContext};
