//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`] trait에만 의존하며, 실행 환경에 따라
//! MongoDB 구현([`MongoUserRepository`]) 또는 메모리 구현([`InMemoryUserRepository`])이 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::default());
//! let taken = user_repo.exists_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 저장소 추상화
///
/// 구현체는 이메일 유일성을 저장 시점에 강제해야 하며,
/// 위반 시 [`AppError::DataIntegrityViolation`](crate::core::errors::AppError::DataIntegrityViolation)을 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 정규화된 이메일이 이미 등록되어 있는지 확인합니다.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 새 사용자를 저장하고 저장된 엔티티를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}
