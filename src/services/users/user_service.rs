//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 등록, 조회, 수정, 비활성화를 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │  • 입력 검증 (validator)                      │
//! │  • 비밀번호 해싱 (PasswordHasher)             │
//! │  • Entity → DTO 변환                          │
//! └───────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌───────────────────────────────────────────────┐
//! │             dyn UserDirectory                 │
//! │  • MongoUserRepository (운영)                 │
//! │  • MemoryUserDirectory (테스트)               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! 계정은 삭제되지 않고 비활성화됩니다. 비활성화된 계정은 로그인과 토큰 갱신이 거부됩니다.
use std::sync::Arc;

use mongodb::bson::DateTime;
use validator::Validate;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{SelfUserResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserDirectory;
use crate::services::auth::PasswordHasher;

pub struct UserService {
    users: Arc<dyn UserDirectory>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserDirectory>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 길이 제한, 비밀번호 확인 불일치, 사용자명과 같은 비밀번호
    /// * `AppError::ConflictError` - 이미 사용 중인 사용자명
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let start_time = std::time::Instant::now();
        let password_hash = self.hasher.hash(&request.password)?;

        let mut user = User::new_local(request.username, password_hash);
        user.latest_password_change = Some(DateTime::now());

        let created = self.users.create(user).await?;

        log::info!(
            "사용자 생성 - username: {}, took: {:?}",
            created.username,
            start_time.elapsed()
        );
        Ok(UserResponse::from(created))
    }

    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        Ok(UserResponse::from(self.load(id).await?))
    }

    /// 역할과 그룹을 포함한 본인 정보
    pub async fn get_self(&self, id: &str) -> AppResult<SelfUserResponse> {
        Ok(SelfUserResponse::from(self.load(id).await?))
    }

    /// 값이 주어진 필드만 수정합니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let mut user = self.load(id).await?;

        if let Some(username) = request.username {
            if username != user.username {
                if let Some(existing) = self.users.find_by_username(&username).await? {
                    if existing.id != user.id {
                        return Err(AppError::ConflictError(
                            "이미 사용 중인 사용자명입니다".to_string(),
                        ));
                    }
                }
                user.username = username;
            }
        }

        if let Some(email) = request.email {
            user.email = Some(email);
        }

        if let Some(password) = request.password {
            if password == user.username {
                return Err(AppError::ValidationError(
                    "비밀번호는 사용자명과 같을 수 없습니다".to_string(),
                ));
            }
            user.password_hash = self.hasher.hash(&password)?;
            user.latest_password_change = Some(DateTime::now());
        }

        user.updated_at = DateTime::now();
        self.users.save(&user).await?;

        Ok(UserResponse::from(user))
    }

    /// 계정을 비활성화합니다. 이미 비활성화된 계정도 성공으로 처리합니다.
    pub async fn deactivate_user(&self, id: &str) -> AppResult<bool> {
        let mut user = self.load(id).await?;

        if user.is_active {
            user.is_active = false;
            user.updated_at = DateTime::now();
            self.users.save(&user).await?;
            log::info!("사용자 비활성화 - user_id: {}", id);
        }

        Ok(true)
    }

    async fn load(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(id.to_string()))
    }
}
