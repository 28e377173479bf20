//! # 회원가입 서비스 구현
//!
//! 신규 사용자 등록 워크플로를 담당합니다.
//!
//! ```text
//! RegisterUserRequest (검증 완료)
//!        │
//!        ▼
//!  이메일 정규화 (소문자)
//!        │
//!        ▼
//!  exists_by_email ── 이미 존재 ──▶ BusinessRuleError::duplicate_email (409)
//!        │
//!        ▼
//!  PasswordEncoder::encode
//!        │
//!        ▼
//!  UserRepository::save ── 유니크 인덱스 위반 ──▶ DataIntegrityViolation (409)
//!        │
//!        ▼
//!  RegisterUserResponse (status = PENDING)
//! ```
//!
//! 중복 이메일인 경우 해싱과 저장은 수행되지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use crate::core::errors::{AppResult, BusinessRuleError};
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::dto::users::response::RegisterUserResponse;
use crate::domain::entities::users::user::{normalize_email, User, UserStatus};
use crate::repositories::users::UserRepository;

use super::password_encoder::PasswordEncoder;

pub struct UserRegistrationService {
    user_repo: Arc<dyn UserRepository>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl UserRegistrationService {
    pub fn new(user_repo: Arc<dyn UserRepository>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { user_repo, encoder }
    }

    /// 신규 사용자 등록
    ///
    /// # 에러
    ///
    /// * `AppError::BusinessRule` - 이미 등록된 이메일 (409)
    /// * `AppError::DataIntegrityViolation` - 동시 가입으로 저장 시점에 중복 발견 (409)
    /// * `AppError::DatabaseError` / `AppError::InternalError` - 저장소 또는 해싱 실패 (500)
    ///
    /// # 로깅
    ///
    /// ```text
    /// [INFO] Password hashing took: 156ms
    /// [INFO] Total user registration took: 170ms
    /// ```
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<RegisterUserResponse> {
        let start_time = Instant::now();
        let email = normalize_email(&request.email);

        if self.user_repo.exists_by_email(&email).await? {
            log::warn!("이미 등록된 이메일로 가입 시도");
            return Err(BusinessRuleError::duplicate_email().into());
        }

        let hash_start = Instant::now();
        let password_hash = self.encoder.encode(&request.password)?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name, &email, password_hash, UserStatus::Pending);
        let saved_user = self.user_repo.save(user).await?;

        log::info!("Total user registration took: {:?}", start_time.elapsed());

        Ok(RegisterUserResponse::from(saved_user))
    }
}
