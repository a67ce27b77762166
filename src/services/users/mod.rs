//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 프로필 조회/수정, 계정 비활성화를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
