//! # Token HTTP Handlers
//!
//! 토큰 발급, 갱신, 폐기 엔드포인트입니다. 토큰은 응답 본문이 아니라 쿠키로만 전달됩니다.
//!
//! | 메서드 | 경로 | 입력 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/api/v1/token/create` | `{username, password}` | 204 + `access`, `refresh` 쿠키 |
//! | `POST` | `/api/v1/token/refresh` | `access`?, `refresh` 쿠키 | 204 + `access` 쿠키 |
//! | `POST` | `/api/v1/token/delete` | `access`?, `refresh`? 쿠키 | 204 + 두 쿠키 삭제 |
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::CookieConfig;
use crate::domain::dto::users::request::LoginRequest;
use crate::domain::models::token::{TokenPair, TokenType};
use crate::errors::AppError;
use crate::handlers::cookies::{read_token, removal_cookie, token_cookie};
use crate::services::auth::TokenService;

/// 로그인: 액세스/리프레시 토큰 쿠키 발급
#[post("/create")]
pub async fn create_token(
    token_service: web::Data<TokenService>,
    cookies: web::Data<CookieConfig>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let pair = token_service
        .login(&request.username, &request.password)
        .await?;

    Ok(with_token_cookies(pair, &cookies))
}

/// 액세스 토큰 갱신
///
/// 함께 전달된 이전 액세스 토큰은 폐기됩니다.
#[post("/refresh")]
pub async fn refresh_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    cookies: web::Data<CookieConfig>,
) -> Result<HttpResponse, AppError> {
    let access = read_token(&req, TokenType::Access);
    let refresh = read_token(&req, TokenType::Refresh);

    let pair = token_service
        .refresh(access.as_deref(), refresh.as_deref())
        .await?;

    Ok(with_token_cookies(pair, &cookies))
}

/// 로그아웃: 전달된 토큰을 폐기하고 두 쿠키를 모두 삭제
#[post("/delete")]
pub async fn delete_token(
    req: HttpRequest,
    token_service: web::Data<TokenService>,
    cookies: web::Data<CookieConfig>,
) -> Result<HttpResponse, AppError> {
    let access = read_token(&req, TokenType::Access);
    let refresh = read_token(&req, TokenType::Refresh);

    token_service
        .logout(access.as_deref(), refresh.as_deref())
        .await?;

    Ok(HttpResponse::NoContent()
        .cookie(removal_cookie(TokenType::Access, &cookies))
        .cookie(removal_cookie(TokenType::Refresh, &cookies))
        .finish())
}

fn with_token_cookies(pair: TokenPair, cookies: &CookieConfig) -> HttpResponse {
    let mut response = HttpResponse::NoContent();
    response.cookie(token_cookie(TokenType::Access, &pair.access, cookies));
    if let Some(refresh) = &pair.refresh {
        response.cookie(token_cookie(TokenType::Refresh, refresh, cookies));
    }
    response.finish()
}
