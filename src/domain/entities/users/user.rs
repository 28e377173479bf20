//! User Entity Implementation
//!
//! 회원가입으로 생성되는 사용자 엔티티입니다.
//! 이메일은 항상 소문자로 정규화되어 저장되며, `users` 컬렉션의
//! `email_unique` 인덱스로 유일성이 보장됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 계정 상태
///
/// 신규 가입자는 이메일 확인 전까지 `Pending` 상태입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Active,
    Inactive,
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id_user: Uuid,
    pub name: String,
    /// 사용자 이메일 (unique, 소문자)
    pub email: String,
    /// bcrypt 해시 (평문은 절대 저장하지 않음)
    pub password: String,
    pub status: UserStatus,
    pub created_at: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 식별자(UUID v4)와 생성 시각은 여기서 부여됩니다.
    pub fn new(name: String, email: &str, password_hash: String, status: UserStatus) -> Self {
        Self {
            id_user: Uuid::new_v4(),
            name,
            email: normalize_email(email),
            password: password_hash,
            status,
            created_at: DateTime::now(),
            updated_at: None,
            deleted_at: None,
        }
    }
}

/// 이메일 비교/저장에 사용하는 정규화 형식
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
