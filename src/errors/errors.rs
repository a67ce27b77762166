//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 코어 로직은 닫힌 에러 종류(`AppError`, `TokenError`)만 반환하며,
//! HTTP 상태 코드로의 변환은 `actix_web::ResponseError` 구현에서만 일어납니다.
//!
//! | 에러 | HTTP |
//! |------|------|
//! | `UserNotFound` | 404 |
//! | `BadCredentials`, `InactiveUser`, `MissingRefreshToken`, `MissingAccessToken`, `RevokedToken` | 401 |
//! | `Token(ExpiredToken)` | 401 |
//! | `Token(TypeMismatch)`, `Token(MalformedOrForged)` | 403 |
//! | `ValidationError` | 400 |
//! | `ConflictError` | 409 |
//! | `StoreUnavailable`, `DatabaseError` | 503 |
//! | `ConfigError`, `InternalError` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(&self, id: &str) -> Result<User, AppError> {
//!     self.users
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::UserNotFound(id.to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::models::token::TokenType;

/// 토큰 디코딩 실패 종류
///
/// 만료, 용도 불일치, 위조/손상은 클라이언트에게 서로 다른 의미이므로 반드시 구분됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// `now > exp`
    #[error("Token has expired")]
    ExpiredToken,

    /// 서명은 유효하지만 기대한 용도의 토큰이 아님
    #[error("Expected {expected} token but got {actual} token")]
    TypeMismatch {
        expected: TokenType,
        actual: TokenType,
    },

    /// 구조, 서명, 알고리즘, 발급자 검증 실패
    #[error("Malformed or forged token: {0}")]
    MalformedOrForged(String),
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 없음 (404 Not Found)
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("Incorrect credentials")]
    BadCredentials,

    /// 비활성화된 계정 (401 Unauthorized)
    #[error("Account is deactivated")]
    InactiveUser,

    /// 리프레시 쿠키 없음 (401 Unauthorized)
    #[error("Refresh token is missing")]
    MissingRefreshToken,

    /// 보호된 경로에 액세스 토큰 없음 (401 Unauthorized)
    #[error("Access token is missing")]
    MissingAccessToken,

    /// 블랙리스트에 등록되었거나 세션이 없는 토큰 (401 Unauthorized)
    #[error("Token has been revoked")]
    RevokedToken,

    /// 토큰 디코딩 실패 (401 / 403)
    #[error(transparent)]
    Token(#[from] TokenError),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 세션 저장소(Redis) 장애 (503 Service Unavailable)
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    /// 데이터베이스 장애 (503 Service Unavailable)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 설정 오류 (500, 시작 시점에는 치명적)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 들어가는 기계 판독용 에러 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UserNotFound(_) => "user_not_found",
            AppError::BadCredentials => "bad_credentials",
            AppError::InactiveUser => "inactive_user",
            AppError::MissingRefreshToken => "missing_refresh_token",
            AppError::MissingAccessToken => "missing_access_token",
            AppError::RevokedToken => "revoked_token",
            AppError::Token(TokenError::ExpiredToken) => "expired_token",
            AppError::Token(TokenError::TypeMismatch { .. }) => "token_type_mismatch",
            AppError::Token(TokenError::MalformedOrForged(_)) => "malformed_token",
            AppError::ValidationError(_) => "validation_error",
            AppError::ConflictError(_) => "conflict",
            AppError::StoreUnavailable(_) => "store_unavailable",
            AppError::DatabaseError(_) => "database_unavailable",
            AppError::ConfigError(_) => "configuration_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadCredentials
            | AppError::InactiveUser
            | AppError::MissingRefreshToken
            | AppError::MissingAccessToken
            | AppError::RevokedToken
            | AppError::Token(TokenError::ExpiredToken) => StatusCode::UNAUTHORIZED,
            AppError::Token(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::StoreUnavailable(_) | AppError::DatabaseError(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인프라 장애의 상세 내용은 로그에만 남기고 응답에는 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
            status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.error_code(),
            "message": message,
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_user_not_found_response() {
        let error = AppError::UserNotFound("user".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_failures_are_unauthorized() {
        for error in [
            AppError::BadCredentials,
            AppError::InactiveUser,
            AppError::MissingRefreshToken,
            AppError::MissingAccessToken,
            AppError::RevokedToken,
            AppError::Token(TokenError::ExpiredToken),
        ] {
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED, "{:?}", error);
        }
    }

    #[test]
    fn test_forged_and_wrong_type_tokens_are_forbidden() {
        let mismatch = AppError::from(TokenError::TypeMismatch {
            expected: TokenType::Access,
            actual: TokenType::Refresh,
        });
        let forged = AppError::from(TokenError::MalformedOrForged("InvalidSignature".to_string()));

        assert_eq!(mismatch.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(forged.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(mismatch.error_code(), "token_type_mismatch");
    }

    #[test]
    fn test_store_outage_is_not_an_auth_failure() {
        let error = AppError::StoreUnavailable("connection refused".to_string());
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("username too short".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
