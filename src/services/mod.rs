//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data`로 공유되며,
//! 저장소와 해셔는 trait 객체로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = TokenService::new(&settings, users.clone(), sessions, hasher.clone());
//! let user_service = UserService::new(users, hasher);
//! ```

pub mod auth;
pub mod users;
