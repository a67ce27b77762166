//! # 세션 저장소 구현
//!
//! 토큰 상태의 가변 부분을 보관합니다. 서명된 토큰 자체는 바뀌지 않으므로,
//! "로그인 상태"는 토큰과 이 저장소를 함께 보아야 판단할 수 있습니다.
//!
//! ## 키 구조
//!
//! | 키 | 타입 | 값 | TTL |
//! |----|------|----|-----|
//! | `session:<jti>` | hash | `user_id`, `groups`, `role` | 액세스 토큰 수명 |
//! | `blacklist:<jti>` | string | `"True"` | 토큰의 남은 수명 |
//!
//! 모든 쓰기는 멱등이며, 같은 jti 를 다시 기록하면 마지막 쓰기가 이깁니다.

use async_trait::async_trait;
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::domain::models::session::SessionRecord;
use crate::errors::AppResult;

/// 블랙리스트 항목 값
pub const BLACKLIST_MARKER: &str = "True";

/// `session:<jti>`
pub fn session_key(jti: Uuid) -> String {
    format!("session:{}", jti)
}

/// `blacklist:<jti>`
pub fn blacklist_key(jti: Uuid) -> String {
    format!("blacklist:{}", jti)
}

/// 세션/블랙리스트 저장소 계약
///
/// 구현체의 모든 실패는 `AppError::StoreUnavailable`로 표면화되어야 하며,
/// 인증 실패(401)로 위장되어서는 안 됩니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 액세스 토큰 jti 에 세션 레코드를 TTL 과 함께 기록합니다.
    async fn record_session(
        &self,
        jti: Uuid,
        record: &SessionRecord,
        ttl_seconds: u64,
    ) -> AppResult<()>;

    /// jti 를 블랙리스트에 등록합니다.
    async fn blacklist(&self, jti: Uuid, ttl_seconds: u64) -> AppResult<()>;

    /// jti 의 블랙리스트 등록 여부
    async fn is_blacklisted(&self, jti: Uuid) -> AppResult<bool>;

    /// jti 에 연결된 세션 레코드 조회. 만료되었거나 없으면 `None`
    async fn find_session(&self, jti: Uuid) -> AppResult<Option<SessionRecord>>;

    /// 저장소 응답 여부 확인
    async fn ping(&self) -> AppResult<()>;
}

/// Redis 기반 세션 저장소
#[derive(Clone)]
pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn record_session(
        &self,
        jti: Uuid,
        record: &SessionRecord,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.redis
            .hset_with_expiry(&session_key(jti), &record.to_fields(), ttl_seconds)
            .await?;

        log::debug!("세션 기록 - jti: {}, ttl: {}초", jti, ttl_seconds);
        Ok(())
    }

    async fn blacklist(&self, jti: Uuid, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&blacklist_key(jti), BLACKLIST_MARKER, ttl_seconds)
            .await?;

        log::info!("토큰 블랙리스트 등록 - jti: {}, ttl: {}초", jti, ttl_seconds);
        Ok(())
    }

    async fn is_blacklisted(&self, jti: Uuid) -> AppResult<bool> {
        Ok(self.redis.exists(&blacklist_key(jti)).await?)
    }

    async fn find_session(&self, jti: Uuid) -> AppResult<Option<SessionRecord>> {
        let fields = self.redis.hgetall(&session_key(jti)).await?;
        Ok(SessionRecord::from_fields(&fields))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(self.redis.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let jti = Uuid::parse_str("9b2f5c1e-7a3d-4e8f-b0c1-2d3e4f5a6b7c").unwrap();

        assert_eq!(session_key(jti), "session:9b2f5c1e-7a3d-4e8f-b0c1-2d3e4f5a6b7c");
        assert_eq!(blacklist_key(jti), "blacklist:9b2f5c1e-7a3d-4e8f-b0c1-2d3e4f5a6b7c");
    }
}
