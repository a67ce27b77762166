//! 세션 레코드
//!
//! `session:<jti>` 키에 Redis 해시로 저장되는 사용자 권한 요약 정보입니다.
//! 로그인/갱신마다 새 jti 로 생성되며, 제자리에서 수정되지 않고 TTL 로 자연 만료됩니다.
use std::collections::HashMap;

use crate::domain::entities::users::user::{Role, User};

/// 해시 필드: 사용자 ID
pub const FIELD_USER_ID: &str = "user_id";
/// 해시 필드: 쉼표로 연결된 그룹 이름
pub const FIELD_GROUPS: &str = "groups";
/// 해시 필드: 역할
pub const FIELD_ROLE: &str = "role";

/// 액세스 토큰 jti 에 연결된 세션 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// 사용자 ID
    pub user_id: String,
    /// 사용자가 속한 그룹 이름 목록
    pub groups: Vec<String>,
    /// 사용자 역할
    pub role: Role,
}

impl SessionRecord {
    /// 사용자 엔티티로부터 세션 레코드를 생성합니다.
    pub fn for_user(user_id: impl Into<String>, user: &User) -> Self {
        Self {
            user_id: user_id.into(),
            groups: user.groups.clone(),
            role: user.role,
        }
    }

    /// Redis 해시 필드 목록으로 변환합니다.
    ///
    /// 그룹은 쉼표로 연결되므로 그룹 이름에는 쉼표가 포함되지 않아야 합니다.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FIELD_USER_ID, self.user_id.clone()),
            (FIELD_GROUPS, self.groups.join(",")),
            (FIELD_ROLE, self.role.as_str().to_string()),
        ]
    }

    /// Redis 해시 필드에서 세션 레코드를 복원합니다.
    ///
    /// 키가 없을 때 Redis 는 빈 해시를 돌려주므로, `user_id` 가 없으면 `None` 입니다.
    pub fn from_fields(fields: &HashMap<String, String>) -> Option<Self> {
        let user_id = fields.get(FIELD_USER_ID)?.clone();
        let groups = fields
            .get(FIELD_GROUPS)
            .map(|joined| {
                joined
                    .split(',')
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let role = fields
            .get(FIELD_ROLE)
            .and_then(|role| role.parse().ok())
            .unwrap_or_default();

        Some(Self { user_id, groups, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip_keeps_groups_and_role() {
        let record = SessionRecord {
            user_id: "64f0c0ffee".to_string(),
            groups: vec!["staff".to_string(), "ops".to_string()],
            role: Role::Admin,
        };

        let fields: HashMap<String, String> = record
            .to_fields()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(fields[FIELD_GROUPS], "staff,ops");
        assert_eq!(fields[FIELD_ROLE], "Admin");
        assert_eq!(SessionRecord::from_fields(&fields), Some(record));
    }

    #[test]
    fn test_empty_hash_is_no_session() {
        assert_eq!(SessionRecord::from_fields(&HashMap::new()), None);
    }

    #[test]
    fn test_empty_groups_field_yields_no_groups() {
        let mut fields = HashMap::new();
        fields.insert(FIELD_USER_ID.to_string(), "1".to_string());
        fields.insert(FIELD_GROUPS.to_string(), String::new());

        let record = SessionRecord::from_fields(&fields).unwrap();
        assert!(record.groups.is_empty());
        assert_eq!(record.role, Role::User);
    }
}
