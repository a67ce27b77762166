//! # Service Registry
//!
//! 애플리케이션 서비스 그래프를 한 곳에서 조립하는 명시적 의존성 주입 컨테이너입니다.
//! 전역 싱글톤 대신, 시작 시 생성한 인프라 구현체(`Arc<dyn ...>`)를 받아
//! 서비스를 만들고 actix-web 의 `app_data`로 등록합니다.
//!
//! ```text
//! main.rs
//!   ├─ MongoUserRepository ──▶ Arc<dyn UserDirectory>
//!   ├─ RedisSessionStore   ──▶ Arc<dyn SessionStore>
//!   └─ BcryptPasswordHasher ─▶ Arc<dyn PasswordHasher>
//!              │
//!              ▼
//!       ServiceRegistry::new(...)
//!              │
//!              ├─ TokenService
//!              ├─ UserService
//!              └─ configure(cfg) ──▶ web::Data<...>
//! ```
//!
//! 테스트에서는 같은 생성자에 인메모리 구현체를 넘기면 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::new(&jwt_settings, CookieConfig::from_env(), users, sessions, hasher);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| registry.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```
use std::sync::Arc;

use actix_web::web;

use crate::config::{CookieConfig, JwtSettings};
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserDirectory;
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::users::UserService;

/// 요청 간에 공유되는 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub users: Arc<dyn UserDirectory>,
    pub sessions: Arc<dyn SessionStore>,
    pub cookies: CookieConfig,
}

impl ServiceRegistry {
    pub fn new(
        jwt: &JwtSettings,
        cookies: CookieConfig,
        users: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(
            jwt,
            users.clone(),
            sessions.clone(),
            hasher.clone(),
        ));
        let user_service = Arc::new(UserService::new(users.clone(), hasher));

        Self {
            token_service,
            user_service,
            users,
            sessions,
            cookies,
        }
    }

    /// 핸들러와 미들웨어가 추출할 수 있도록 `app_data`를 등록합니다.
    ///
    /// | 추출 타입 | 사용처 |
    /// |-----------|--------|
    /// | `web::Data<TokenService>` | 토큰 핸들러, `AuthMiddleware` |
    /// | `web::Data<UserService>` | 사용자 핸들러 |
    /// | `web::Data<dyn UserDirectory>` | 헬스 체크 |
    /// | `web::Data<dyn SessionStore>` | 헬스 체크 |
    /// | `web::Data<CookieConfig>` | 쿠키 생성 |
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.sessions.clone()))
            .app_data(web::Data::new(self.cookies.clone()));
    }
}
