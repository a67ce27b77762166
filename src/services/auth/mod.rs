//! 인증 및 토큰 서비스 모듈
//!
//! JWT 액세스/리프레시 토큰의 발급, 검증, 폐기를 담당합니다.
//!
//! # Features
//!
//! - HMAC 서명 토큰 발급 및 용도(`Access`/`Refresh`) 검증
//! - 세션 레코드 기록과 jti 블랙리스트 기반 폐기
//! - bcrypt 비밀번호 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let pair = token_service.login("alice", "password_123").await?;
//! let user = token_service.authenticate(&pair.access.token).await?;
//! ```

pub mod password_hasher;
pub mod token_codec;
pub mod token_service;

pub use password_hasher::*;
pub use token_codec::*;
pub use token_service::*;
