//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계의 데이터 계약입니다. 엔티티를 그대로 노출하지 않고
//! 요청은 `request`, 응답은 `response` 타입을 거쳐 변환됩니다.
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문/쿼리 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validation::Valid` 추출기 | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |

pub mod users;

pub use users::*;
