//! JWT 인코딩/디코딩
//!
//! HMAC 서명 토큰의 발급과 검증을 담당합니다. 저장소에는 접근하지 않으며,
//! 블랙리스트/세션 판단은 [`TokenService`](super::TokenService)의 몫입니다.
//!
//! ## 디코딩 실패 구분
//!
//! | 상황 | 에러 |
//! |------|------|
//! | 서명/구조/알고리즘/발급자 불일치 | `MalformedOrForged` |
//! | `type` 클레임이 기대와 다름 (만료 여부와 무관) | `TypeMismatch` |
//! | `now > exp` | `ExpiredToken` |
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::models::token::{IssuedToken, TokenClaims, TokenSubject, TokenType};
use crate::errors::{AppError, ErrorContext, TokenError};

/// 토큰 발급기 겸 검증기
///
/// 시작 시 검증된 [`JwtSettings`]로 한 번 생성되어 요청 간에 공유됩니다.
///
/// ```rust,ignore
/// let codec = TokenCodec::new(&settings);
/// let access = codec.issue(&TokenSubject::new(user_id, "alice"), TokenType::Access)?;
/// let claims = codec.decode(&access.token, TokenType::Access)?;
/// ```
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            algorithm: settings.algorithm,
            issuer: settings.issuer.clone(),
            access_lifetime: settings.access_lifetime(),
            refresh_lifetime: settings.refresh_lifetime(),
        }
    }

    /// 토큰 용도별 명목 수명
    pub fn lifetime(&self, token_type: TokenType) -> Duration {
        match token_type {
            TokenType::Access => self.access_lifetime,
            TokenType::Refresh => self.refresh_lifetime,
        }
    }

    /// 현재 시각 기준으로 새 토큰을 발급합니다. 매 발급마다 새 jti 가 생성됩니다.
    pub fn issue(&self, subject: &TokenSubject, token_type: TokenType) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, token_type, Utc::now().timestamp())
    }

    pub(crate) fn issue_at(
        &self,
        subject: &TokenSubject,
        token_type: TokenType,
        issued_at: i64,
    ) -> Result<IssuedToken, AppError> {
        let claims = TokenClaims {
            sub: subject.user_id.clone(),
            username: subject.username.clone(),
            iss: self.issuer.clone(),
            token_type,
            jti: Uuid::new_v4(),
            iat: issued_at,
            exp: issued_at + self.lifetime(token_type).num_seconds(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")?;

        Ok(IssuedToken { token, claims })
    }

    /// 서명, 발급자, 용도, 만료를 모두 검증하고 클레임을 반환합니다.
    pub fn decode(&self, token: &str, expected: TokenType) -> Result<TokenClaims, TokenError> {
        let claims = self.verify_signature(token)?;

        if claims.token_type != expected {
            return Err(TokenError::TypeMismatch {
                expected,
                actual: claims.token_type,
            });
        }

        if Utc::now().timestamp() > claims.exp {
            return Err(TokenError::ExpiredToken);
        }

        Ok(claims)
    }

    /// 서명과 발급자만 검증하고, 용도와 만료는 무시합니다.
    ///
    /// 남은 수명과 무관하게 토큰을 폐기해야 하는 경로(로그아웃, 갱신 시 이전 액세스 토큰)에서 사용합니다.
    pub fn inspect(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_signature(token)
    }

    fn verify_signature(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // 만료는 용도 검사 이후에 직접 판단
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iat", "iss", "sub"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::MalformedOrForged(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn codec() -> TokenCodec {
        TokenCodec::new(&JwtSettings::new(SECRET).unwrap())
    }

    fn subject() -> TokenSubject {
        TokenSubject::new("64f0c0ffee0000000000beef", "user")
    }

    #[test]
    fn test_issue_and_decode_keep_subject() {
        let codec = codec();

        for token_type in [TokenType::Access, TokenType::Refresh] {
            let issued = codec.issue(&subject(), token_type).unwrap();
            let claims = codec.decode(&issued.token, token_type).unwrap();

            assert_eq!(claims.sub, "64f0c0ffee0000000000beef");
            assert_eq!(claims.username, "user");
            assert_eq!(claims.iss, "user_service");
            assert_eq!(claims.jti, issued.jti());
            assert!(claims.exp > claims.iat);
            assert_eq!(
                issued.lifetime_seconds(),
                codec.lifetime(token_type).num_seconds()
            );
        }
    }

    #[test]
    fn test_every_issue_mints_new_jti() {
        let codec = codec();
        let first = codec.issue(&subject(), TokenType::Access).unwrap();
        let second = codec.issue(&subject(), TokenType::Access).unwrap();

        assert_ne!(first.jti(), second.jti());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let codec = codec();
        let refresh = codec.issue(&subject(), TokenType::Refresh).unwrap();

        assert_eq!(
            codec.decode(&refresh.token, TokenType::Access),
            Err(TokenError::TypeMismatch {
                expected: TokenType::Access,
                actual: TokenType::Refresh,
            })
        );
    }

    #[test]
    fn test_wrong_type_wins_over_expiry() {
        let codec = codec();
        let long_ago = Utc::now().timestamp() - Duration::days(30).num_seconds();
        let expired_access = codec
            .issue_at(&subject(), TokenType::Access, long_ago)
            .unwrap();

        assert!(matches!(
            codec.decode(&expired_access.token, TokenType::Refresh),
            Err(TokenError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_expired_refresh_token() {
        let codec = codec();
        let long_ago = Utc::now().timestamp() - Duration::days(8).num_seconds();
        let expired = codec
            .issue_at(&subject(), TokenType::Refresh, long_ago)
            .unwrap();

        assert_eq!(
            codec.decode(&expired.token, TokenType::Refresh),
            Err(TokenError::ExpiredToken)
        );
        // 폐기 경로는 만료된 토큰도 읽을 수 있어야 함
        assert_eq!(codec.inspect(&expired.token).unwrap().jti, expired.jti());
    }

    #[test]
    fn test_foreign_secret_is_forged() {
        let foreign = TokenCodec::new(&JwtSettings::new("ffffffffffffffffffffffffffffffff").unwrap());
        let token = foreign.issue(&subject(), TokenType::Access).unwrap();

        assert!(matches!(
            codec().decode(&token.token, TokenType::Access),
            Err(TokenError::MalformedOrForged(_))
        ));
        assert!(matches!(
            codec().inspect(&token.token),
            Err(TokenError::MalformedOrForged(_))
        ));
    }

    #[test]
    fn test_other_algorithm_and_garbage_are_forged() {
        let mut settings = JwtSettings::new(SECRET).unwrap();
        settings.algorithm = Algorithm::HS512;
        let hs512 = TokenCodec::new(&settings);
        let token = hs512.issue(&subject(), TokenType::Access).unwrap();

        assert!(matches!(
            codec().decode(&token.token, TokenType::Access),
            Err(TokenError::MalformedOrForged(_))
        ));
        assert!(matches!(
            codec().decode("not.a.token", TokenType::Access),
            Err(TokenError::MalformedOrForged(_))
        ));
    }

    #[test]
    fn test_foreign_issuer_is_forged() {
        let mut settings = JwtSettings::new(SECRET).unwrap();
        settings.issuer = "someone_else".to_string();
        let token = TokenCodec::new(&settings)
            .issue(&subject(), TokenType::Access)
            .unwrap();

        assert!(matches!(
            codec().decode(&token.token, TokenType::Access),
            Err(TokenError::MalformedOrForged(_))
        ));
    }
}
