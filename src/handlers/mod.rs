//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 서비스 호출로 변환하고, 서비스 에러(`AppError`)는
//! `ResponseError` 구현을 통해 상태 코드로 변환됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (쿠키)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   TokenService / UserService                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserDirectory / SessionStore                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 서비스 주입
//!
//! 서비스는 `ServiceRegistry::configure`가 등록한 `web::Data`로 추출합니다.
//!
//! ```rust,ignore
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     user_service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = user_service.get_user(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`token_handlers`] - 로그인, 토큰 갱신, 로그아웃
//! - [`users`] - 사용자 등록/조회/수정/비활성화
//! - [`health`] - 저장소 헬스 체크
//! - [`cookies`] - 토큰 쿠키 생성/삭제

pub mod cookies;
pub mod health;
pub mod token_handlers;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use uuid::Uuid;

    use crate::config::{CookieConfig, JwtSettings};
    use crate::core::ServiceRegistry;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::token::TokenPair;
    use crate::repositories::memory::{MemorySessionStore, MemoryUserDirectory};
    use crate::repositories::sessions::SessionStore;
    use crate::repositories::users::UserDirectory;
    use crate::services::auth::{BcryptPasswordHasher, PasswordHasher};

    pub const SECRET: &str = "0123456789abcdef0123456789abcdef";

    /// 인메모리 저장소와 `user` / `password_123` 계정으로 구성된 서비스 묶음
    pub struct TestContext {
        pub registry: ServiceRegistry,
        pub users: Arc<MemoryUserDirectory>,
        pub sessions: Arc<MemorySessionStore>,
        pub user_id: String,
    }

    impl TestContext {
        pub async fn new() -> Self {
            let users = Arc::new(MemoryUserDirectory::new());
            let sessions = Arc::new(MemorySessionStore::new());
            let hasher = Arc::new(BcryptPasswordHasher::new(4));

            let user = User::new_local("user".to_string(), hasher.hash("password_123").unwrap());
            let user = users.create(user).await.unwrap();

            let registry = ServiceRegistry::new(
                &JwtSettings::new(SECRET).unwrap(),
                CookieConfig::default(),
                users.clone(),
                sessions.clone(),
                hasher,
            );

            Self {
                registry,
                users,
                sessions,
                user_id: user.id_string().unwrap(),
            }
        }

        pub async fn login(&self) -> TokenPair {
            self.registry
                .token_service
                .login("user", "password_123")
                .await
                .unwrap()
        }

        pub async fn is_blacklisted(&self, jti: Uuid) -> bool {
            self.sessions.is_blacklisted(jti).await.unwrap()
        }
    }
}
