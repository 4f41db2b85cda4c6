//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 API 표현으로 바꾼 타입과, 성공 봉투(`ApiResponse`)의 `data` 자리에
//! 들어가는 래퍼들입니다.
//!
//! ```json
//! {
//!   "status": "success",
//!   "message": "User retrieved successfully",
//!   "data": { "user": { "id": "...", "name": "Jane", "email": "jane@example.com", ... } }
//! }
//! ```

pub mod user_response;

pub use user_response::{UserData, UserListing, UserResponse, UsersData};
