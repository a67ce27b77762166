//! 사용자 인증 토큰 서비스
//!
//! 사용자 등록, 자격 증명 검증, 그리고 JWT 액세스/리프레시 토큰 기반의
//! 세션 발급/갱신/폐기를 제공하는 인증 마이크로서비스입니다.
//!
//! # Features
//!
//! - **토큰 생명주기**: 로그인, 액세스 토큰 갱신, 로그아웃
//! - **폐기 프로토콜**: Redis `blacklist:<jti>` / `session:<jti>` 기반 재사용 방지
//! - **쿠키 전송**: `HttpOnly`, `SameSite=Lax` 쿠키로만 토큰 전달
//! - **사용자 관리**: 등록, 프로필 조회/수정, 계정 비활성화
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **명시적 DI**: `ServiceRegistry`가 trait 객체를 주입
//!
//! # Architecture
//!
//! ```text
//! routes ─▶ handlers ─▶ services ─▶ repositories ─▶ MongoDB / Redis
//!              │            │
//!              └ cookies    └ TokenCodec, PasswordHasher
//! ```
//!
//! 요청 처리 흐름은 바깥에서 안쪽으로만 의존합니다. 저장소 구현은 trait 객체로
//! 주입되므로 테스트에서는 인메모리 구현으로 교체됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_token_service::core::ServiceRegistry;
//!
//! let registry = ServiceRegistry::new(&jwt, cookies, users, sessions, hasher);
//! let pair = registry.token_service.login("alice", "password_123").await?;
//! let user = registry.token_service.authenticate(&pair.access.token).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
