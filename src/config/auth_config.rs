//! # Authentication Configuration Module
//!
//! 토큰 서명과 쿠키 전송에 관한 설정을 관리합니다.
//! 서명 비밀키와 알고리즘은 프로세스 시작 시 한 번만 로드되며, 유효하지 않으면
//! 서버는 트래픽을 받지 않고 종료해야 합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="at-least-32-bytes-of-secret-material!!"   # 필수, 32바이트 이상
//! export JWT_ALGORITHM="HS256"                  # HS256 | HS384 | HS512
//! export JWT_ISSUER="user_service"
//! export JWT_ACCESS_EXPIRATION_MINUTES="15"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! export JWT_ROTATE_REFRESH="false"             # 갱신 시 리프레시 토큰 회전 여부
//! export COOKIE_SECURE="false"                  # Secure 쿠키 속성
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtSettings;
//!
//! let settings = JwtSettings::from_env()?;
//! let access_ttl = settings.access_lifetime();
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::errors::AppError;

/// 서명 비밀키 최소 길이 (바이트)
pub const MIN_SECRET_LENGTH: usize = 32;

/// 기본 발급자
pub const DEFAULT_ISSUER: &str = "user_service";

/// 액세스 토큰 기본 수명 (분)
pub const DEFAULT_ACCESS_EXPIRATION_MINUTES: i64 = 15;

/// 리프레시 토큰 기본 수명 (일)
pub const DEFAULT_REFRESH_EXPIRATION_DAYS: i64 = 7;

/// JWT 서명 및 수명 설정
///
/// 대칭키(HMAC) 알고리즘만 허용됩니다.
#[derive(Clone)]
pub struct JwtSettings {
    /// HMAC 서명 비밀키
    pub secret: String,
    /// 서명 알고리즘
    pub algorithm: Algorithm,
    /// `iss` 클레임 값
    pub issuer: String,
    /// 액세스 토큰 수명 (분)
    pub access_expiration_minutes: i64,
    /// 리프레시 토큰 수명 (일)
    pub refresh_expiration_days: i64,
    /// 갱신 시 사용한 리프레시 토큰을 폐기하고 새로 발급할지 여부
    pub rotate_refresh_tokens: bool,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("access_expiration_minutes", &self.access_expiration_minutes)
            .field("refresh_expiration_days", &self.refresh_expiration_days)
            .field("rotate_refresh_tokens", &self.rotate_refresh_tokens)
            .finish()
    }
}

impl JwtSettings {
    /// 기본값과 주어진 비밀키로 설정을 생성하고 검증합니다.
    pub fn new(secret: impl Into<String>) -> Result<Self, AppError> {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            issuer: DEFAULT_ISSUER.to_string(),
            access_expiration_minutes: DEFAULT_ACCESS_EXPIRATION_MINUTES,
            refresh_expiration_days: DEFAULT_REFRESH_EXPIRATION_DAYS,
            rotate_refresh_tokens: false,
        }
        .validated()
    }

    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `JWT_SECRET` 누락/짧음, 지원하지 않는 알고리즘, 잘못된 수명 값
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 로드합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET must be set".to_string()))?;

        let algorithm = match lookup("JWT_ALGORITHM") {
            Some(name) => Algorithm::from_str(name.trim()).map_err(|_| {
                AppError::ConfigError(format!("Unsupported JWT_ALGORITHM: {}", name))
            })?,
            None => Algorithm::HS256,
        };

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        let access_expiration_minutes = parse_or(
            &lookup,
            "JWT_ACCESS_EXPIRATION_MINUTES",
            DEFAULT_ACCESS_EXPIRATION_MINUTES,
        )?;
        let refresh_expiration_days = parse_or(
            &lookup,
            "JWT_REFRESH_EXPIRATION_DAYS",
            DEFAULT_REFRESH_EXPIRATION_DAYS,
        )?;
        let rotate_refresh_tokens = parse_or(&lookup, "JWT_ROTATE_REFRESH", false)?;

        Self {
            secret,
            algorithm,
            issuer,
            access_expiration_minutes,
            refresh_expiration_days,
            rotate_refresh_tokens,
        }
        .validated()
    }

    /// 설정 불변식을 검증합니다.
    pub fn validated(self) -> Result<Self, AppError> {
        if self.secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::ConfigError(format!(
                "JWT secret must be at least {} bytes",
                MIN_SECRET_LENGTH
            )));
        }
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AppError::ConfigError(format!(
                "JWT algorithm {:?} is not an HMAC algorithm",
                self.algorithm
            )));
        }
        if self.issuer.trim().is_empty() {
            return Err(AppError::ConfigError("JWT issuer must not be empty".to_string()));
        }
        if self.access_expiration_minutes <= 0 || self.refresh_expiration_days <= 0 {
            return Err(AppError::ConfigError(
                "Token lifetimes must be positive".to_string(),
            ));
        }
        if Duration::try_minutes(self.access_expiration_minutes).is_none()
            || Duration::try_days(self.refresh_expiration_days).is_none()
        {
            return Err(AppError::ConfigError(
                "Token lifetimes are out of range".to_string(),
            ));
        }
        Ok(self)
    }

    /// 액세스 토큰 수명
    ///
    /// 검증을 거치지 않은 값이 범위를 벗어나면 기본값을 사용합니다.
    pub fn access_lifetime(&self) -> Duration {
        Duration::try_minutes(self.access_expiration_minutes)
            .unwrap_or_else(|| Duration::minutes(DEFAULT_ACCESS_EXPIRATION_MINUTES))
    }

    /// 리프레시 토큰 수명
    pub fn refresh_lifetime(&self) -> Duration {
        Duration::try_days(self.refresh_expiration_days)
            .unwrap_or_else(|| Duration::days(DEFAULT_REFRESH_EXPIRATION_DAYS))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid value for {}: {}", key, raw))),
        None => Ok(default),
    }
}

/// 토큰 쿠키 전송 설정
#[derive(Debug, Clone, Default)]
pub struct CookieConfig {
    /// `Secure` 속성 부여 여부 (HTTPS 전용)
    pub secure: bool,
}

impl CookieConfig {
    /// 환경 변수 `COOKIE_SECURE`에서 로드합니다. 기본값: false
    pub fn from_env() -> Self {
        let secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self { secure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = JwtSettings::from_lookup(lookup_from(&[("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(settings.algorithm, Algorithm::HS256);
        assert_eq!(settings.issuer, DEFAULT_ISSUER);
        assert_eq!(settings.access_lifetime(), Duration::minutes(15));
        assert_eq!(settings.refresh_lifetime(), Duration::days(7));
        assert!(!settings.rotate_refresh_tokens);
    }

    #[test]
    fn test_missing_or_short_secret_is_fatal() {
        assert!(matches!(
            JwtSettings::from_lookup(lookup_from(&[])),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            JwtSettings::new("too-short"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let result = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ALGORITHM", "RS256"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        let result = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ALGORITHM", "SHA-nothing"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_overrides_and_invalid_lifetimes() {
        let settings = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ALGORITHM", "HS512"),
            ("JWT_ACCESS_EXPIRATION_MINUTES", "5"),
            ("JWT_REFRESH_EXPIRATION_DAYS", "30"),
            ("JWT_ROTATE_REFRESH", "true"),
        ]))
        .unwrap();
        assert_eq!(settings.algorithm, Algorithm::HS512);
        assert_eq!(settings.access_lifetime(), Duration::minutes(5));
        assert_eq!(settings.refresh_lifetime(), Duration::days(30));
        assert!(settings.rotate_refresh_tokens);

        let zero = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ACCESS_EXPIRATION_MINUTES", "0"),
        ]));
        assert!(matches!(zero, Err(AppError::ConfigError(_))));

        let garbage = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_REFRESH_EXPIRATION_DAYS", "a week"),
        ]));
        assert!(matches!(garbage, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_overflowing_lifetimes_are_config_errors() {
        let access = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_ACCESS_EXPIRATION_MINUTES", "999999999999999999"),
        ]));
        assert!(matches!(access, Err(AppError::ConfigError(_))));

        let refresh = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_REFRESH_EXPIRATION_DAYS", "999999999999999"),
        ]));
        assert!(matches!(refresh, Err(AppError::ConfigError(_))));

        let year = JwtSettings::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("JWT_REFRESH_EXPIRATION_DAYS", "365"),
        ]))
        .unwrap();
        assert_eq!(year.refresh_lifetime(), Duration::days(365));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = JwtSettings::new(SECRET).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains(SECRET));
        assert!(printed.contains("<redacted>"));
    }
}
