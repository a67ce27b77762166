//! 토큰 생명주기 서비스 구현
//!
//! 로그인, 갱신, 로그아웃, 요청 인증을 조율합니다.
//! "로그인 상태"는 서명된 토큰과 세션 저장소에 나뉘어 있으므로,
//! 토큰이 서명/만료 검증을 통과하더라도 블랙리스트와 세션 레코드를 함께 확인합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Anonymous ──login──▶ Authenticated(access, refresh)
//!                          │
//!                       refresh ──▶ Refreshed(access', refresh)   (이전 access 는 블랙리스트)
//!                          │
//!                       logout  ──▶ Revoked                       (두 jti 모두 블랙리스트)
//! ```
use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use mongodb::bson::DateTime;

use super::password_hasher::PasswordHasher;
use super::token_codec::TokenCodec;
use crate::config::JwtSettings;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::session::SessionRecord;
use crate::domain::models::token::{
    IssuedToken, LogoutReport, TokenClaims, TokenPair, TokenSubject, TokenType,
};
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserDirectory;

/// 토큰 생명주기 서비스
///
/// 협력 객체는 모두 trait 객체로 주입되므로 테스트에서는 인메모리 구현으로 대체할 수 있습니다.
///
/// ```rust,ignore
/// let service = TokenService::new(&settings, users, sessions, hasher);
/// let pair = service.login("alice", "password_123").await?;
/// ```
pub struct TokenService {
    codec: TokenCodec,
    users: Arc<dyn UserDirectory>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
    rotate_refresh_tokens: bool,
}

impl TokenService {
    pub fn new(
        settings: &JwtSettings,
        users: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            codec: TokenCodec::new(settings),
            users,
            sessions,
            hasher,
            rotate_refresh_tokens: settings.rotate_refresh_tokens,
        }
    }

    /// 사용자명/비밀번호로 로그인하고 액세스/리프레시 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 사용자명이 존재하지 않음
    /// * `AppError::BadCredentials` - 비밀번호 불일치
    /// * `AppError::InactiveUser` - 비활성화된 계정
    /// * `AppError::StoreUnavailable` - 세션 기록 실패
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        let mut user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound(username.to_string()))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!("로그인 실패 - 비밀번호 불일치: {}", username);
            return Err(AppError::BadCredentials);
        }

        if !user.is_active {
            warn!("로그인 거부 - 비활성화된 계정: {}", username);
            return Err(AppError::InactiveUser);
        }

        let subject = Self::subject_of(&user)?;
        let access = self.codec.issue(&subject, TokenType::Access)?;
        let refresh = self.codec.issue(&subject, TokenType::Refresh)?;

        self.record_session(&access, &user).await?;

        user.latest_login = Some(DateTime::now());
        if let Err(e) = self.users.save(&user).await {
            warn!("마지막 로그인 시간 갱신 실패 - user_id: {}, error: {}", subject.user_id, e);
        }

        info!(
            "로그인 성공 - user_id: {}, access jti: {}, refresh jti: {}",
            subject.user_id,
            access.jti(),
            refresh.jti()
        );

        Ok(TokenPair {
            access,
            refresh: Some(refresh),
        })
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 함께 전달된 액세스 토큰은 만료 여부와 무관하게 먼저 블랙리스트에 등록됩니다.
    /// 리프레시 토큰 회전이 켜져 있으면 사용된 리프레시 토큰도 폐기하고 새로 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingRefreshToken` - 리프레시 쿠키 없음
    /// * `AppError::Token(_)` - 리프레시 토큰 만료/용도 불일치/위조
    /// * `AppError::RevokedToken` - 이미 폐기된 리프레시 토큰
    /// * `AppError::UserNotFound`, `AppError::InactiveUser`
    pub async fn refresh(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> AppResult<TokenPair> {
        let refresh_token = refresh_token
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingRefreshToken)?;

        if let Some(previous) = access_token.filter(|token| !token.is_empty()) {
            self.revoke(previous, Some(TokenType::Access)).await?;
        }

        let claims = self.codec.decode(refresh_token, TokenType::Refresh)?;

        if self.sessions.is_blacklisted(claims.jti).await? {
            warn!("폐기된 리프레시 토큰 사용 시도 - jti: {}", claims.jti);
            return Err(AppError::RevokedToken);
        }

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::UserNotFound(claims.sub.clone()))?;

        if !user.is_active {
            return Err(AppError::InactiveUser);
        }

        let subject = Self::subject_of(&user)?;
        let access = self.codec.issue(&subject, TokenType::Access)?;
        self.record_session(&access, &user).await?;

        let refresh = if self.rotate_refresh_tokens {
            self.sessions
                .blacklist(claims.jti, Self::blacklist_ttl(&claims))
                .await?;
            Some(self.codec.issue(&subject, TokenType::Refresh)?)
        } else {
            None
        };

        info!(
            "토큰 갱신 - user_id: {}, new access jti: {}",
            subject.user_id,
            access.jti()
        );

        Ok(TokenPair { access, refresh })
    }

    /// 전달된 토큰들을 각자의 용도에 맞는 TTL 로 블랙리스트에 등록합니다.
    ///
    /// 누락되었거나 서명이 유효하지 않은 토큰은 건너뜁니다.
    /// 저장소 장애만 에러로 반환됩니다.
    pub async fn logout(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> AppResult<LogoutReport> {
        let mut report = LogoutReport::default();

        if let Some(token) = access_token.filter(|token| !token.is_empty()) {
            report.revoked_access = self.revoke(token, None).await?;
        }
        if let Some(token) = refresh_token.filter(|token| !token.is_empty()) {
            report.revoked_refresh = self.revoke(token, None).await?;
        }

        info!("로그아웃 처리 - {:?}", report);
        Ok(report)
    }

    /// 액세스 토큰을 검증하고 세션 레코드로부터 인증 컨텍스트를 구성합니다.
    ///
    /// 블랙리스트에 있거나 세션 레코드가 없는 토큰은 `RevokedToken`입니다.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.codec.decode(access_token, TokenType::Access)?;

        if self.sessions.is_blacklisted(claims.jti).await? {
            return Err(AppError::RevokedToken);
        }

        let session = self
            .sessions
            .find_session(claims.jti)
            .await?
            .ok_or(AppError::RevokedToken)?;

        Ok(AuthenticatedUser {
            user_id: session.user_id,
            username: claims.username,
            role: session.role,
            groups: session.groups,
        })
    }

    /// 서명이 유효한 토큰을 블랙리스트에 등록하고 jti 를 반환합니다.
    ///
    /// `expected`가 주어지면 다른 용도의 토큰은 건너뜁니다.
    async fn revoke(
        &self,
        token: &str,
        expected: Option<TokenType>,
    ) -> AppResult<Option<uuid::Uuid>> {
        let claims = match self.codec.inspect(token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("폐기 대상 토큰 무시 - {}", e);
                return Ok(None);
            }
        };

        if let Some(expected) = expected {
            if claims.token_type != expected {
                warn!(
                    "폐기 대상 토큰 무시 - {} 토큰 자리에 {} 토큰",
                    expected, claims.token_type
                );
                return Ok(None);
            }
        }

        self.sessions
            .blacklist(claims.jti, Self::blacklist_ttl(&claims))
            .await?;
        Ok(Some(claims.jti))
    }

    /// 블랙리스트 TTL: 토큰 자신의 `exp`까지 남은 수명, 최소 1초
    ///
    /// 현재 수명 설정으로 자르지 않으므로 설정을 줄인 뒤에도 이전에 발급된 토큰은 만료 시점까지 폐기 상태로 남습니다.
    fn blacklist_ttl(claims: &TokenClaims) -> u64 {
        claims.remaining_seconds(Utc::now().timestamp()).max(1) as u64
    }

    async fn record_session(&self, access: &IssuedToken, user: &User) -> AppResult<()> {
        let record = SessionRecord::for_user(access.claims.sub.clone(), user);
        let ttl = self.codec.lifetime(TokenType::Access).num_seconds().max(1) as u64;

        self.sessions.record_session(access.jti(), &record, ttl).await
    }

    fn subject_of(user: &User) -> AppResult<TokenSubject> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        Ok(TokenSubject::new(user_id, user.username.clone()))
    }
}
