//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자 엔티티를 저장합니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `email_unique` 인덱스가 동시 가입 경쟁 상황의 최종 방어선
//! - **에러 매핑**: 중복 키 에러(코드 11000)는 `DataIntegrityViolation`,
//!   그 외 드라이버 에러는 `DatabaseError`로 변환

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::UserRepository;
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::User,
};

const COLLECTION_NAME: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출됩니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ 사용자 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.collection()
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        Ok(user)
    }
}

fn map_write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::DataIntegrityViolation(error.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}
