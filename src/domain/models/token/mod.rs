//! 토큰 도메인 모델
//!
//! 클레임, 토큰 용도, 발급 결과 등 토큰 생명주기에서 사용되는 값 객체를 제공합니다.

pub mod token;

pub use token::*;
