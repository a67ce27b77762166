//! 세션 및 토큰 블랙리스트 저장소 모듈
//!
//! [`SessionStore`](session_repo::SessionStore) trait 과 Redis 구현체를 제공합니다.

pub mod session_repo;

pub use session_repo::*;
