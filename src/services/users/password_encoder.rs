//! 비밀번호 해싱
//!
//! 서비스 계층은 [`PasswordEncoder`] trait에만 의존합니다.
//! 운영 환경에서는 bcrypt 구현이 주입되고, 테스트에서는 빠른 가짜 구현을 사용합니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

pub trait PasswordEncoder: Send + Sync {
    /// 평문 비밀번호를 저장 가능한 해시로 변환합니다.
    fn encode(&self, raw_password: &str) -> AppResult<String>;
}

/// bcrypt 기반 비밀번호 인코더
///
/// cost는 환경별 기본값 또는 `BCRYPT_COST` 환경 변수를 따릅니다.
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 인코더를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordEncoder for BcryptPasswordEncoder {
    fn encode(&self, raw_password: &str) -> AppResult<String> {
        bcrypt::hash(raw_password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }
}
