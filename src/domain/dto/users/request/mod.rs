//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON 본문과 쿼리 문자열을 구조화된 타입으로 받습니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 역직렬화 실패는 `CastError`(400)
//! 2. **스키마 검증**: `Valid<T>` 추출기가 `validator` 규칙 적용, 실패 시 `ValidationError`(400)
//! 3. **엔티티 재검증**: 서비스 계층에서 저장 직전 `InvalidData`(400)

pub mod create_user;
pub mod list_users;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use list_users::ListUsersQuery;
pub use update_user::UpdateUserRequest;
