//! 실행 환경, 저장소 연결, 서버 바인딩 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 없거나 파싱할 수 없으면 기본값을 사용합니다.
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` | `production` |
//! | `BCRYPT_COST` | 환경별 (4 / 10 / 12) |
//! | `HOST`, `PORT`, `WORKERS` | `0.0.0.0`, `8080`, `4` |
//! | `REDIS_URL` 또는 `REDIS_HOST`/`REDIS_PORT`/`REDIS_DB` | `redis://127.0.0.1:6379/0` |
//! | `MONGODB_URI`, `DATABASE_NAME` | `mongodb://localhost:27017`, `auth` |

use std::convert::Infallible;
use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| name.parse().unwrap_or(Environment::Production))
            .unwrap_or(Environment::Production)
    }
}

/// 알 수 없는 이름은 `Production`으로 해석됩니다.
impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        })
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    const MIN_COST: u32 = 4;
    const MAX_COST: u32 = 15;

    /// `BCRYPT_COST`가 4..=15 범위이면 그 값을, 아니면 환경별 기본 cost 를 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::default_cost(Environment::current()))
    }

    pub fn default_cost(environment: Environment) -> u32 {
        match environment {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수 (0 이하는 무시)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(4)
    }
}

/// 세션/블랙리스트 저장소(Redis) 연결 설정
pub struct RedisConfig;

impl RedisConfig {
    /// `REDIS_URL`이 있으면 그대로, 없으면 호스트/포트/DB 번호로 조합합니다.
    pub fn url() -> String {
        if let Ok(url) = env::var("REDIS_URL") {
            return url;
        }

        let host = env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());
        format!("redis://{}:{}/{}", host, port, db)
    }
}

/// 사용자 저장소(MongoDB) 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "auth".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_names() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(" Testing ".parse::<Environment>(), Ok(Environment::Test));
        assert_eq!("stage".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("whatever".parse::<Environment>(), Ok(Environment::Production));
    }

    #[test]
    fn test_default_bcrypt_cost_per_environment() {
        assert_eq!(PasswordConfig::default_cost(Environment::Development), 4);
        assert_eq!(PasswordConfig::default_cost(Environment::Test), 4);
        assert_eq!(PasswordConfig::default_cost(Environment::Staging), 10);
        assert_eq!(PasswordConfig::default_cost(Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_stays_in_range() {
        let cost = PasswordConfig::bcrypt_cost();
        assert!((PasswordConfig::MIN_COST..=PasswordConfig::MAX_COST).contains(&cost));
    }

    #[test]
    fn test_connection_defaults() {
        if env::var("PORT").is_err() && env::var("HOST").is_err() {
            assert_eq!(ServerConfig::bind_address(), "0.0.0.0:8080");
        }

        if env::var("REDIS_URL").is_err() && env::var("REDIS_HOST").is_err() {
            assert!(RedisConfig::url().starts_with("redis://127.0.0.1:"));
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::name(), "auth");
        }
    }
}
