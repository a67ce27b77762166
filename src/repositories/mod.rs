//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 trait 객체(`Arc<dyn UserDirectory>`, `Arc<dyn SessionStore>`)에만 의존하고,
//! 구현체는 애플리케이션 시작 시 주입됩니다.
//!
//! - [`users`] - MongoDB 사용자 디렉터리
//! - [`sessions`] - Redis 세션/블랙리스트 저장소
//! - `memory` - 테스트용 인메모리 구현체
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::sessions::{RedisSessionStore, SessionStore};
//!
//! let sessions: Arc<dyn SessionStore> = Arc::new(RedisSessionStore::new(redis));
//! let revoked = sessions.is_blacklisted(jti).await?;
//! ```

pub mod sessions;
pub mod users;

#[cfg(test)]
pub mod memory;
