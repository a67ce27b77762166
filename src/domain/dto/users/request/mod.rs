//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 길이, 이메일 형식 (validator 필드 속성)
//! 3. **교차 검증**: 비밀번호 확인 일치, 사용자명과 동일한 비밀번호 금지 (schema 함수)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! `AppError::ValidationError`로 변환되어 HTTP 400 응답이 됩니다.

pub mod auth_request;
pub mod create_user_request;

pub use auth_request::LoginRequest;
pub use create_user_request::{CreateUserRequest, UpdateUserRequest};
