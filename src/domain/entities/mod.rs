//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속성 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속성 엔티티)
//! ├── models/       ← 토큰, 세션, 인증 사용자 등 값 객체
//! └── dto/          ← HTTP 요청/응답 객체
//! ```

pub mod users;
