//! 테스트용 인메모리 저장소
//!
//! 외부 인프라 없이 서비스와 핸들러를 검증하기 위한 `UserDirectory`/`SessionStore` 구현체입니다.
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use super::sessions::{blacklist_key, session_key, SessionStore};
use super::users::UserDirectory;
use crate::domain::entities::users::user::User;
use crate::domain::models::session::SessionRecord;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryUserDirectory {
    users: Mutex<Vec<User>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 스냅샷
    pub fn get(&self, id: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("duplicate username".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.id != user.id && u.username == user.username)
        {
            return Err(AppError::ConflictError("duplicate username".to_string()));
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(AppError::UserNotFound(user.id_string().unwrap_or_default())),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

struct Entry {
    value: EntryValue,
    ttl_seconds: u64,
    expires_at: Instant,
}

enum EntryValue {
    Marker,
    Session(SessionRecord),
}

/// TTL 을 흉내내는 세션 저장소
///
/// `set_unavailable(true)` 이후의 모든 호출은 `StoreUnavailable`로 실패합니다.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, Entry>>,
    unavailable: AtomicBool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 키에 마지막으로 기록된 TTL (초). 없거나 만료되었으면 `None`
    pub fn ttl_of(&self, key: &str) -> Option<u64> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.ttl_seconds)
    }

    pub fn blacklisted_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with("blacklist:"))
            .count()
    }

    fn check(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn put(&self, key: String, value: EntryValue, ttl_seconds: u64) {
        let entry = Entry {
            value,
            ttl_seconds,
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        self.entries.lock().unwrap().insert(key, entry);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn record_session(
        &self,
        jti: Uuid,
        record: &SessionRecord,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.check()?;
        self.put(session_key(jti), EntryValue::Session(record.clone()), ttl_seconds);
        Ok(())
    }

    async fn blacklist(&self, jti: Uuid, ttl_seconds: u64) -> AppResult<()> {
        self.check()?;
        self.put(blacklist_key(jti), EntryValue::Marker, ttl_seconds);
        Ok(())
    }

    async fn is_blacklisted(&self, jti: Uuid) -> AppResult<bool> {
        self.check()?;
        Ok(self.ttl_of(&blacklist_key(jti)).is_some())
    }

    async fn find_session(&self, jti: Uuid) -> AppResult<Option<SessionRecord>> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(&session_key(jti))
            .filter(|e| e.expires_at > Instant::now())
            .and_then(|e| match &e.value {
                EntryValue::Session(record) => Some(record.clone()),
                EntryValue::Marker => None,
            }))
    }

    async fn ping(&self) -> AppResult<()> {
        self.check()
    }
}
