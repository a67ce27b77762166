//! # Domain Models Module
//!
//! 영속성이 없는 도메인 값 객체를 정의합니다.
//!
//! - [`token`] - 토큰 클레임, 용도, 발급 결과
//! - [`session`] - `session:<jti>` 레코드
//! - [`auth`] - 인증된 사용자 정보와 역할 요구사항

pub mod auth;
pub mod session;
pub mod token;
