//! 헬스 체크
//!
//! 세션 저장소와 사용자 디렉터리에 모두 응답이 있어야 `"success"`입니다.
use actix_web::{get, web, HttpResponse};

use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserDirectory;

#[get("/check")]
pub async fn health_check(
    sessions: web::Data<dyn SessionStore>,
    users: web::Data<dyn UserDirectory>,
) -> HttpResponse {
    let (session_status, user_status) = futures_util::join!(sessions.ping(), users.ping());

    match (session_status, user_status) {
        (Ok(()), Ok(())) => HttpResponse::Ok().json("success"),
        (session_status, user_status) => {
            log::error!(
                "헬스 체크 실패 - session store: {:?}, user directory: {:?}",
                session_status.err(),
                user_status.err()
            );
            HttpResponse::ServiceUnavailable().json("fail")
        }
    }
}
