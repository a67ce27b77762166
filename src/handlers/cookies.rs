//! 토큰 쿠키 생성/삭제
//!
//! 모든 토큰 쿠키는 `HttpOnly`, `SameSite=Lax`, `Path=/` 속성을 가지며,
//! `Max-Age`는 토큰 수명(초)과 같습니다. `COOKIE_SECURE=true`이면 `Secure`가 추가됩니다.
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

use crate::config::CookieConfig;
use crate::domain::models::token::{IssuedToken, TokenType};

/// 발급된 토큰을 담는 쿠키
pub fn token_cookie(
    token_type: TokenType,
    issued: &IssuedToken,
    config: &CookieConfig,
) -> Cookie<'static> {
    Cookie::build(token_type.cookie_name(), issued.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::seconds(issued.lifetime_seconds()))
        .finish()
}

/// 쿠키 삭제용: 빈 값, `Max-Age=0`
pub fn removal_cookie(token_type: TokenType, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(token_type.cookie_name(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::ZERO)
        .finish()
}

/// 요청 쿠키에서 토큰 값을 읽습니다. 빈 값은 없는 것으로 취급합니다.
pub fn read_token(req: &HttpRequest, token_type: TokenType) -> Option<String> {
    req.cookie(token_type.cookie_name())
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::TokenClaims;
    use uuid::Uuid;

    fn issued() -> IssuedToken {
        IssuedToken {
            token: "header.payload.signature".to_string(),
            claims: TokenClaims {
                sub: "1".to_string(),
                username: "user".to_string(),
                iss: "user_service".to_string(),
                token_type: TokenType::Access,
                jti: Uuid::new_v4(),
                iat: 1_000,
                exp: 1_900,
            },
        }
    }

    #[test]
    fn test_token_cookie_attributes() {
        let cookie = token_cookie(TokenType::Access, &issued(), &CookieConfig::default());

        assert_eq!(cookie.name(), "access");
        assert_eq!(cookie.value(), "header.payload.signature");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_secure_flag_and_removal() {
        let config = CookieConfig { secure: true };
        assert_eq!(
            token_cookie(TokenType::Refresh, &issued(), &config).secure(),
            Some(true)
        );

        let removal = removal_cookie(TokenType::Refresh, &config);
        assert_eq!(removal.name(), "refresh");
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
    }
}
