//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/api/v1` 아래에 있으며, 끝의 `/`는 `NormalizePath::trim()`이 제거합니다.
//!
//! # Routes
//!
//! | 스코프 | 인증 | 핸들러 |
//! |--------|------|--------|
//! | `/api/v1/token` | 없음 (쿠키 직접 처리) | create, refresh, delete |
//! | `/api/v1/users/me` | `AuthMiddleware::required()` | get_me |
//! | `/api/v1/users` | 없음 | create, get, patch, delete |
//! | `/api/v1/check` | 없음 | health_check |
//!
//! `/api/v1/users/me`는 `/api/v1/users/{user_id}`보다 먼저 등록되어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .configure(|cfg| registry.configure(cfg))
//!     .configure(configure_all_routes)
//! ```

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_token_routes(cfg);
    configure_user_routes(cfg);

    cfg.service(web::scope("/api/v1").service(handlers::health::health_check));
}

fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/token")
            .service(handlers::token_handlers::create_token)
            .service(handlers::token_handlers::refresh_token)
            .service(handlers::token_handlers::delete_token),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Protected routes
    cfg.service(
        web::scope("/api/v1/users/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me),
    );

    // Public routes
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::deactivate_user),
    );
}
