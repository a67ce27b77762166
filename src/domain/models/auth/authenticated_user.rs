use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::Role;
use crate::errors::AppError;

/// 액세스 토큰과 세션 레코드에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (토큰의 `sub`)
    pub user_id: String,

    /// 사용자명
    pub username: String,

    /// 세션에 기록된 역할
    pub role: Role,

    /// 세션에 기록된 그룹 이름 목록
    pub groups: Vec<String>,
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 request extension 에 넣어둔 사용자 정보를 꺼냅니다.
/// 미들웨어 없이 등록된 경로라면 다른 401 응답과 같은 JSON 본문으로 거절합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or(AppError::MissingAccessToken),
        )
    }
}
