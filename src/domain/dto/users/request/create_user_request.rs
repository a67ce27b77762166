//! 사용자 생성/수정 요청 DTO
//!
//! 새로운 사용자 계정 생성과 프로필 수정을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_credentials"))]
pub struct CreateUserRequest {
    /// 사용자명 (4-40자)
    #[validate(length(
        min = 4,
        max = 40,
        message = "사용자명은 4-40자 사이여야 합니다"
    ))]
    pub username: String,

    /// 계정 비밀번호 (8-72자, bcrypt 입력 한도)
    #[validate(length(
        min = 8,
        max = 72,
        message = "비밀번호는 8-72자 사이여야 합니다"
    ))]
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    #[validate(length(
        min = 8,
        max = 72,
        message = "비밀번호 확인은 8-72자 사이여야 합니다"
    ))]
    pub password_retry: String,
}

/// 사용자 정보 수정 요청 DTO
///
/// 값이 주어진 필드만 수정합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_credentials"))]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 4,
        max = 40,
        message = "사용자명은 4-40자 사이여야 합니다"
    ))]
    pub username: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(
        min = 8,
        max = 72,
        message = "비밀번호는 8-72자 사이여야 합니다"
    ))]
    pub password: Option<String>,

    pub password_retry: Option<String>,
}

/// 비밀번호 일치 여부 및 사용자명과의 중복 검증
fn validate_credentials(req: &CreateUserRequest) -> Result<(), ValidationError> {
    check_passwords(&req.password, Some(&req.password_retry), Some(&req.username))
}

fn validate_update_credentials(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    match &req.password {
        Some(password) => check_passwords(
            password,
            req.password_retry.as_ref(),
            req.username.as_ref(),
        ),
        None => Ok(()),
    }
}

fn check_passwords(
    password: &str,
    retry: Option<&String>,
    username: Option<&String>,
) -> Result<(), ValidationError> {
    if retry.map(String::as_str) != Some(password) {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    if username.map(String::as_str) == Some(password) {
        return Err(ValidationError::new("password_equals_username")
            .with_message("비밀번호는 사용자명과 같을 수 없습니다".into()));
    }
    Ok(())
}
