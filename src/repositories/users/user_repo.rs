//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당합니다.
//! 서비스 계층은 [`UserDirectory`] trait 에만 의존하며, 운영 환경에서는
//! MongoDB 기반의 [`MongoUserRepository`]가 주입됩니다.
//!
//! ## 컬렉션 및 인덱스
//!
//! - **컬렉션명**: `users`
//! - **인덱스**: username(unique), email(unique, sparse), created_at(desc)

use async_trait::async_trait;
use log::info;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 계약
///
/// 조회 메서드는 사용자가 없을 때 `Ok(None)`을 반환하며,
/// `UserNotFound`로의 변환은 서비스 계층의 책임입니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// ID(16진수 ObjectId 문자열)로 사용자 조회
    ///
    /// ObjectId 형식이 아닌 ID는 존재하지 않는 사용자로 취급합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명으로 사용자 조회
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명 또는 이메일 중복
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 문서를 통째로 교체합니다.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// 저장소 응답 여부 확인
    async fn ping(&self) -> AppResult<()>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database);
/// repo.ensure_indexes().await?;
///
/// let user = repo.find_by_username("alice").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 유니크 제약을 위한 인덱스를 생성합니다. 이미 존재하면 아무 일도 하지 않습니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        // 이메일은 선택 항목이므로 sparse
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([username_index, email_index, created_at_index])
            .await?;

        info!("사용자 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
    } else {
        AppError::from(error)
    }
}

#[async_trait]
impl UserDirectory for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.collection().find_one(doc! { "_id": object_id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .collection()
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 사용자명입니다".to_string(),
            ));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자입니다".to_string()))?;

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, user)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Err(AppError::UserNotFound(id.to_hex()));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(self.db.ping().await?)
    }
}
