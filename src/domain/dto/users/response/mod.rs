//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 객체입니다.
//! 비밀번호 해시 등 민감한 정보는 응답에서 제외됩니다.
//!
//! - `UserResponse` - 공개 사용자 정보 (id, username, email)
//! - `SelfUserResponse` - 본인 정보 (역할, 그룹 포함)

pub mod user_response;

pub use user_response::{GroupResponse, SelfUserResponse, UserResponse};
