//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserDirectory`](user_repo::UserDirectory) trait 과 MongoDB 구현체
//! [`MongoUserRepository`](user_repo::MongoUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserDirectory};
//!
//! let users: Arc<dyn UserDirectory> = Arc::new(MongoUserRepository::new(&database));
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
