//! 메모리 기반 사용자 리포지토리
//!
//! `USER_STORE=memory`로 실행할 때와 테스트에서 사용됩니다.
//! MongoDB의 `email_unique` 인덱스와 동일하게 저장 시점에 이메일 유일성을 강제합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserRepository;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;

/// 이메일 → 사용자 맵
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// 저장된 사용자 수
    pub fn count(&self) -> AppResult<usize> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;
        Ok(users.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;
        Ok(users.contains_key(email))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        if users.contains_key(&user.email) {
            return Err(AppError::DataIntegrityViolation(format!(
                "duplicate key email_unique: {}",
                user.email
            )));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
