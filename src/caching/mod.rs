//! 캐싱 계층 모듈
//!
//! Redis 연결과 세션 저장소가 사용하는 명령들을 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new("redis://localhost:6379/0").await?;
//! redis.hset_with_expiry("session:abc", &fields, 900).await?;
//! let fields = redis.hgetall("session:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379/0  # 또는 REDIS_HOST / REDIS_PORT / REDIS_DB
//! ```

pub mod redis;
