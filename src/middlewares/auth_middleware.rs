//! 액세스 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `access` 쿠키를 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 인증 미들웨어
///
/// 인증에 실패하면 핸들러를 호출하지 않고 `AppError`의 상태 코드로 응답합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 액세스 토큰을 요구
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::header;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use serde_json::Value;

    use crate::domain::models::auth::AuthenticatedUser;
    use crate::handlers::test_support::TestContext;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    #[actix_web::test]
    async fn test_cookie_or_bearer_attaches_user() {
        let ctx = TestContext::new().await;
        let app = test::init_service(
            App::new()
                .configure(|cfg| ctx.registry.configure(cfg))
                .service(
                    web::scope("/guarded")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;
        let pair = ctx.login().await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .cookie(Cookie::new("access", pair.access.token.clone()))
            .to_request();
        let user: AuthenticatedUser = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.user_id, ctx.user_id);
        assert_eq!(user.username, "user");

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", pair.access.token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_refresh_token_is_rejected_as_access() {
        let ctx = TestContext::new().await;
        let app = test::init_service(
            App::new()
                .configure(|cfg| ctx.registry.configure(cfg))
                .service(
                    web::scope("/guarded")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;
        let pair = ctx.login().await;
        let refresh = pair.refresh.unwrap();

        let req = test::TestRequest::get()
            .uri("/guarded")
            .cookie(Cookie::new("access", refresh.token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "token_type_mismatch");
    }

    #[actix_web::test]
    async fn test_extractor_without_middleware_answers_json_401() {
        let app = test::init_service(App::new().route("/open", web::get().to(whoami))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/open").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "missing_access_token");
    }
}
