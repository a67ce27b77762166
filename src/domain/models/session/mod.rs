//! 세션 도메인 모델
//!
//! 액세스 토큰의 jti 에 묶인 세션 레코드를 정의합니다.

pub mod session;

pub use session::*;
