//! 요청 스키마 검증
//!
//! [`Valid`]는 actix 추출기(`web::Json`, `web::Query`, `web::Path`)를 감싸서
//! 역직렬화된 섹션을 `validator` 규칙으로 검사합니다.
//! 핸들러 인자에 선언된 섹션만 검사되며, 검사에 실패하면 핸들러는 실행되지 않고
//! 모든 위반 메시지를 `", "`로 연결한 `AppError::ValidationError`(400)가 반환됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     payload: Valid<web::Json<CreateUserRequest>>,
//! ) -> Result<HttpResponse, AppError> {
//!     let request = payload.into_inner().into_inner();
//!     // request는 이미 검증 완료
//! }
//! ```

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, AppResult};

/// 검증을 통과한 요청 섹션
#[derive(Debug)]
pub struct Valid<T>(pub T);

impl<T> Valid<T> {
    /// 감싸고 있는 추출기를 꺼냅니다.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Valid<T>
where
    T: FromRequest + Deref + 'static,
    T::Target: Validate,
    T::Future: 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let extract = T::from_request(req, payload);

        Box::pin(async move {
            let section = extract.await.map_err(Into::into)?;
            validate_section(&*section)?;
            Ok(Valid(section))
        })
    }
}

/// 한 섹션을 검증하고 실패 시 400 에러로 변환합니다.
pub fn validate_section<S>(section: &S) -> AppResult<()>
where
    S: Validate + ?Sized,
{
    section
        .validate()
        .map_err(|errors| AppError::ValidationError(collect_messages(&errors).join(", ")))
}

/// 모든 필드 위반 메시지를 필드 이름 순으로 모읍니다.
///
/// 규칙에 메시지가 지정되지 않았다면 `"<field> is invalid"`를 사용합니다.
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
