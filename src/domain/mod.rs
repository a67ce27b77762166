//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속성 객체 (User)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 토큰 클레임, 세션 레코드, 인증 컨텍스트
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, caching, db)
//! ```
//!
//! 도메인 타입은 actix-web 의 추출기 구현을 제외하면 전송 계층을 알지 못합니다.

pub mod entities;
pub mod dto;
pub mod models;
