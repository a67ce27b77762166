//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 토큰 서비스는 이 중 ID, 사용자명, 역할, 그룹, 활성화 여부만 읽습니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// 일반 사용자
    #[default]
    User,
    /// 관리자
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 사용자 이메일 (unique, 선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할
    #[serde(default)]
    pub role: Role,
    /// 소속 그룹 이름 목록
    #[serde(default)]
    pub groups: Vec<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_login: Option<DateTime>,
    /// 마지막 비밀번호 변경 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_password_change: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 기본 역할은 `User`이며, 그룹 없이 활성화된 상태로 시작합니다.
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email: None,
            password_hash,
            role: Role::User,
            groups: Vec::new(),
            is_active: true,
            latest_login: None,
            latest_password_change: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
