//! 메시지 키 상수
//!
//! 검증 코드(`validation.*`)는 `validator`의 에러 코드로도 사용되므로
//! 필드 위반 메시지 역시 같은 번들에서 번역됩니다.

pub const BUSINESS_RULE_TITLE: &str = "error.business-rule.title";
pub const INSUFFICIENT_FUNDS: &str = "error.business-rule.account.insufficient-funds";
pub const EMAIL_DUPLICATE: &str = "error.business-rule.user.email.duplicate";

pub const VALIDATION_TITLE: &str = "error.validation.title";
pub const VALIDATION_MESSAGE: &str = "error.validation.message";

pub const SERVER_TITLE: &str = "error.server.title";
pub const SERVER_GENERIC: &str = "error.server.generic";

pub const JSON_TITLE: &str = "error.json.title";
pub const JSON_MESSAGE: &str = "error.json.message";

pub const TYPE_MISMATCH_TITLE: &str = "error.type_mismatch.title";
pub const TYPE_MISMATCH_MESSAGE: &str = "error.type_mismatch.message";

pub const METHOD_NOT_ALLOWED_TITLE: &str = "error.method_not_allowed.title";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "error.method_not_allowed.message";

pub const NOT_FOUND_TITLE: &str = "error.not_found.title";
pub const NOT_FOUND_MESSAGE: &str = "error.not_found.message";

pub const CONFLICT_TITLE: &str = "error.conflict.title";
pub const CONFLICT_MESSAGE: &str = "error.conflict.message";

pub const WELCOME_MESSAGE: &str = "welcome.message";

// 필드 검증 코드
pub const NOT_EMPTY: &str = "validation.not_empty";
pub const SIZE_MAX: &str = "validation.size.max";
pub const EMAIL_INVALID: &str = "validation.email";
pub const PASSWORD_WEAK: &str = "validation.password.weak";
