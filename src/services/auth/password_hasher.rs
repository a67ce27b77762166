//! 비밀번호 해싱
//!
//! 서비스 계층은 [`PasswordHasher`] 계약에만 의존합니다.
//! 운영 구현체는 bcrypt 를 사용하며, cost 는 실행 환경별로 [`PasswordConfig`]에서 결정됩니다.
use crate::config::PasswordConfig;
use crate::errors::{AppError, ErrorContext};

/// 단방향 해시 및 검증 계약
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해시합니다. 같은 입력이라도 솔트에 따라 결과가 달라집니다.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError>;
}

/// bcrypt 구현체
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 실행 환경별 기본 cost 를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(password, self.cost)
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, password_hash)
            .context("비밀번호 검증 실패")
    }
}
