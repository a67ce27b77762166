//! JWT 인증 토큰 구조체 및 발급 결과
//!
//! RFC 7519 JWT 표준 클레임과 액세스/리프레시 두 가지 용도의 토큰 정보를 정의합니다.
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 토큰의 용도
///
/// 토큰 페이로드의 `type` 클레임으로 직렬화되며, 디코딩 시 항상 기대하는 용도와 비교됩니다.
/// 리프레시 토큰은 액세스 토큰 자리에서, 액세스 토큰은 리프레시 토큰 자리에서 절대 허용되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// API 호출용 단기 토큰
    Access,
    /// 새 액세스 토큰 발급 전용 장기 토큰
    Refresh,
}

impl TokenType {
    /// 토큰을 운반하는 쿠키 이름
    pub fn cookie_name(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => f.write_str("Access"),
            TokenType::Refresh => f.write_str("Refresh"),
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `username`: 사용자명
/// - `iss`: 발급자
/// - `type`: 토큰 용도 (`Access` / `Refresh`)
/// - `jti`: 토큰 고유 식별자 (세션/블랙리스트 키)
/// - `iat`: 발급 시간 (Unix timestamp, 초)
/// - `exp`: 만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 사용자명
    pub username: String,
    /// 발급자
    pub iss: String,
    /// 토큰 용도
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// 토큰 고유 식별자
    pub jti: Uuid,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 주어진 시각 기준 남은 수명 (초). 이미 만료되었으면 0 이하입니다.
    pub fn remaining_seconds(&self, now: i64) -> i64 {
        self.exp - now
    }
}

/// 토큰 발급 대상 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    /// 사용자 ID
    pub user_id: String,
    /// 사용자명
    pub username: String,
}

impl TokenSubject {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

/// 서명된 토큰과 그 클레임
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// `header.payload.signature` 형식의 서명된 토큰 문자열
    pub token: String,
    /// 토큰에 서명된 클레임
    pub claims: TokenClaims,
}

impl IssuedToken {
    pub fn jti(&self) -> Uuid {
        self.claims.jti
    }

    /// 쿠키 Max-Age 로 사용할 토큰 수명 (초)
    pub fn lifetime_seconds(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}

/// 로그인/갱신 결과로 클라이언트에게 전달되는 토큰 집합
///
/// 갱신 시에는 리프레시 토큰 회전이 활성화된 경우에만 `refresh`가 채워집니다.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// 액세스 토큰
    pub access: IssuedToken,
    /// 리프레시 토큰 (선택사항)
    pub refresh: Option<IssuedToken>,
}

/// 로그아웃 처리 결과
///
/// 실제로 블랙리스트에 등록된 토큰의 jti 를 담습니다. 쿠키는 결과와 무관하게 항상 삭제됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoutReport {
    pub revoked_access: Option<Uuid>,
    pub revoked_refresh: Option<Uuid>,
}
