//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 프로필 파일은 `main.rs`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, Redis, MongoDB, bcrypt 설정
//! - [`auth_config`] - JWT 서명/수명, 쿠키 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(서명 비밀키)는 환경 변수로만 제공
//! - 서명 설정은 시작 시 한 번 검증되며, 실패하면 서버를 띄우지 않음
//! - 나머지 값은 개발 환경에 안전한 기본값 제공
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtSettings, RedisConfig, ServerConfig};
//!
//! let jwt = JwtSettings::from_env()?;
//! let redis_url = RedisConfig::url();
//! let bind = ServerConfig::bind_address();
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
