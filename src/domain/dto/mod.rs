//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! 입력값 검증은 `validator` 크레이트로 수행합니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | `users::request` | 회원가입, 프로필 수정, 로그인 요청 본문 |
//! | `users::response` | 사용자 정보 응답 본문 |
//!
//! 토큰 자체는 응답 본문이 아닌 HTTP-only 쿠키로 전달되므로 토큰 응답 DTO 는 없습니다.

pub mod users;

pub use users::*;
