//! 인증 요청관련 DTO
//!
//! 토큰 발급을 요청하는 사용자의 자격 증명을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인(토큰 발급) 요청 구조체
///
/// 비밀번호 정책은 회원가입 시점에만 적용됩니다. 로그인에서는 비어 있지 않은지만 확인하고,
/// 틀린 비밀번호는 검증 오류가 아닌 `BadCredentials`로 처리합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
