//! # 회원가입 요청 DTO
//!
//! `POST /api/v1/auth/signup` 요청 본문입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `name` | 비어 있지 않음, 최대 200자 |
//! | `email` | 비어 있지 않음, 이메일 형식, 최대 150자 |
//! | `password` | 비어 있지 않음, 최대 100자, 복잡도 정책 |
//!
//! 비밀번호 복잡도 정책: 10자 이상, 영문 대/소문자, 숫자, 특수문자(`@#$!%*?&._-`)를
//! 각각 하나 이상 포함하고 그 외 문자(공백 포함)는 허용하지 않습니다.
//!
//! 검증 코드는 그대로 메시지 키로 사용되어 에러 응답의 `details`에서 번역됩니다.
//! 누락된 필드는 빈 문자열로 채워지므로, `{}` 본문은 형식 오류가 아니라
//! 필드별 검증 실패로 보고됩니다.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::i18n::keys;

/// 비밀번호에 허용되는 특수문자
const PASSWORD_SPECIALS: &str = "@#$!%*?&._-";
const PASSWORD_MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterUserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 200, code = "validation.size.max"))]
    #[validate(custom(function = "validate_not_empty"))]
    pub name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 150, code = "validation.size.max"))]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(max = 100, code = "validation.size.max"))]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// `null`은 누락된 필드와 같게 빈 문자열로 받습니다.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(keys::NOT_EMPTY));
    }
    Ok(())
}

/// 빈 이메일은 형식 오류 없이 누락으로만 보고합니다.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    validate_not_empty(email)?;
    if !email.validate_email() {
        return Err(ValidationError::new(keys::EMAIL_INVALID));
    }
    Ok(())
}

/// 빈 비밀번호는 복잡도 위반이 아니라 누락으로 보고합니다.
fn validate_password(password: &str) -> Result<(), ValidationError> {
    validate_not_empty(password)?;
    validate_password_strength(password)
}

/// 비밀번호 보안 강도 검증
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    let strong = password.chars().count() >= PASSWORD_MIN_LENGTH
        && allowed
        && has_lowercase
        && has_uppercase
        && has_digit
        && has_special;

    if !strong {
        return Err(ValidationError::new(keys::PASSWORD_WEAK));
    }
    Ok(())
}
