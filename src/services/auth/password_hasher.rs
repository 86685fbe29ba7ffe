//! 비밀번호 해싱 협력자
//!
//! 해싱 알고리즘 선택은 계정 흐름의 관심사가 아니므로 [`PasswordHasher`] trait 뒤에 둡니다.
//! 기본 구현 [`BcryptPasswordHasher`]는 환경별 cost를 사용합니다.
//!
//! 검증 실패(잘못된 해시 형식 포함)는 항상 `false`로 취급되며 패닉하지 않습니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱 인터페이스
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해시합니다.
    fn hash(&self, secret: &str) -> AppResult<String>;

    /// 평문 비밀번호가 해시와 일치하는지 확인합니다.
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경의 cost(`BCRYPT_COST` 또는 환경 기본값)로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, secret: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let digest = bcrypt::hash(secret, self.cost).context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(digest)
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        let verify_start = std::time::Instant::now();
        let result = bcrypt::verify(secret, digest);
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        match result {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("비밀번호 검증 중 오류, 실패로 처리: {}", e);
                false
            }
        }
    }
}
