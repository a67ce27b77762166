//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users/me` | 본인 정보 (인증 필요) | 200 OK |
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/api/v1/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/v1/users/{id}` | 계정 비활성화 | 200 OK (`true`) |
//!
//! 입력 검증 실패는 400, 중복 사용자명은 409 로 응답합니다.
use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 인증된 사용자 본인 정보
///
/// `AuthMiddleware`로 감싼 스코프에서만 등록됩니다.
#[get("")]
pub async fn get_me(
    user_service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_self(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[patch("/{user_id}")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service
        .update_user(&user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{user_id}")]
pub async fn deactivate_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deactivated = user_service.deactivate_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(deactivated))
}
