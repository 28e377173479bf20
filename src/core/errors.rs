//! # Application Error Handling System
//!
//! FinSense API의 통합 에러 처리 시스템입니다.
//! 요청 처리 중 발생하는 모든 실패를 하나의 태그드 유니온([`AppError`])으로 표현하고,
//! 패턴 매칭을 통해 `{상태 코드, 제목 키, 메시지 키, 인자, 필드 상세}`로 분류합니다.
//! 분류된 결과는 호출자의 로케일로 번역되어 [`ErrorResponse`] 봉투(envelope)로 응답됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 제목 키 | 필드 상세 |
//! |----------|-------------|---------|-----------|
//! | `BusinessRule` | 에러에 포함된 상태 | 에러에 포함된 키 | 없음 |
//! | `ValidationError` | 400 Bad Request | `error.validation.title` | 필드별 1개 이상 |
//! | `MalformedRequest` | 400 Bad Request | `error.json.title` | 없음 |
//! | `TypeMismatch` | 400 Bad Request | `error.type_mismatch.title` | 없음 |
//! | `MethodNotAllowed` | 405 Method Not Allowed | `error.method_not_allowed.title` | 없음 |
//! | `NotFound` | 404 Not Found | `error.not_found.title` | 없음 |
//! | `DataIntegrityViolation` | 409 Conflict | `error.conflict.title` | 없음 |
//! | `DatabaseError` | 500 Internal Server Error | `error.server.title` | 없음 |
//! | `InternalError` | 500 Internal Server Error | `error.server.title` | 없음 |
//!
//! 500 계열 응답은 내부 정보를 절대 노출하지 않으며, 상세 내용은 서버 로그에만 기록됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, BusinessRuleError};
//!
//! async fn register(&self, email: &str) -> AppResult<()> {
//!     if self.user_repo.exists_by_email(email).await? {
//!         return Err(BusinessRuleError::duplicate_email().into());
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::dto::errors::{ErrorDetail, ErrorResponse};
use crate::i18n::{keys, Locale, MessageSource};

/// 비즈니스 규칙 위반 에러
///
/// 도메인 규칙(예: 이메일 중복) 위반을 나타냅니다.
/// HTTP 상태 코드를 에러 자체가 명시적으로 들고 다니며,
/// 호출자가 영향을 줄 수 있는 메시지 인자를 가질 수 있는 유일한 에러 종류입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRuleError {
    status: StatusCode,
    title_key: String,
    message_key: String,
    args: Vec<String>,
}

impl BusinessRuleError {
    /// 상태 코드와 제목/메시지 키로 비즈니스 에러를 생성합니다.
    pub fn new(
        status: StatusCode,
        title_key: impl Into<String>,
        message_key: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title_key: title_key.into(),
            message_key: message_key.into(),
            args: Vec::new(),
        }
    }

    /// 메시지 보간에 사용할 위치 인자를 설정합니다.
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        self.args = args.into_iter().map(|arg| arg.to_string()).collect();
        self
    }

    /// 이미 가입된 이메일로 회원가입을 시도한 경우 (409 Conflict)
    pub fn duplicate_email() -> Self {
        Self::new(StatusCode::CONFLICT, keys::CONFLICT_TITLE, keys::EMAIL_DUPLICATE)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for BusinessRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message_key, self.status)
    }
}

impl std::error::Error for BusinessRuleError {}

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 중 발생할 수 있는 모든 실패 종류를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?` 연산자만으로 HTTP 응답까지 전파됩니다.
///
/// 실제 로케일/경로가 반영된 응답은 [`crate::middlewares::ErrorTranslation`]이 만듭니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 비즈니스 규칙 위반 (상태 코드는 에러가 결정)
    #[error("Business rule violation: {0}")]
    BusinessRule(#[from] BusinessRuleError),

    /// 요청 필드 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// 읽을 수 없거나 형식이 잘못된 요청 본문 (400 Bad Request)
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 경로/쿼리 파라미터 타입 불일치 (400 Bad Request)
    #[error("Type mismatch: parameter '{name}' received '{value}'")]
    TypeMismatch { name: String, value: String },

    /// 지원하지 않는 HTTP 메서드 (405 Method Not Allowed)
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// 존재하지 않는 경로 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 유니크 제약/무결성 위반 (409 Conflict)
    ///
    /// 동시에 같은 이메일로 가입하는 경쟁 상황은 애플리케이션 락이 아니라
    /// 저장소의 유니크 인덱스에서 잡혀 이 변형으로 올라옵니다.
    #[error("Data integrity violation: {0}")]
    DataIntegrityViolation(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 번역 전 단계의 에러 분류 결과
///
/// 상태 코드와 메시지 키, 인자, 필드별 위반 목록만 담고 있으며
/// [`MessageSource`]를 거쳐 사람이 읽을 수 있는 [`ErrorResponse`]가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    pub status: StatusCode,
    pub title_key: String,
    pub message_key: String,
    pub args: Vec<String>,
    pub details: Option<Vec<FieldViolation>>,
}

/// 필드 하나에 대한 제약 위반 (메시지 키 = 검증 코드)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    pub args: Vec<String>,
}

impl ErrorDescriptor {
    fn new(status: StatusCode, title_key: &str, message_key: &str) -> Self {
        Self {
            status,
            title_key: title_key.to_string(),
            message_key: message_key.to_string(),
            args: Vec::new(),
            details: None,
        }
    }

    fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn with_details(mut self, details: Vec<FieldViolation>) -> Self {
        self.details = Some(details);
        self
    }
}

impl AppError {
    /// 에러를 상태 코드/메시지 키/인자/필드 상세로 분류합니다.
    pub fn descriptor(&self) -> ErrorDescriptor {
        match self {
            AppError::BusinessRule(error) => ErrorDescriptor::new(
                error.status(),
                error.title_key(),
                error.message_key(),
            )
            .with_args(error.args().to_vec()),
            AppError::ValidationError(errors) => ErrorDescriptor::new(
                StatusCode::BAD_REQUEST,
                keys::VALIDATION_TITLE,
                keys::VALIDATION_MESSAGE,
            )
            .with_details(field_violations(errors)),
            AppError::MalformedRequest(_) => {
                ErrorDescriptor::new(StatusCode::BAD_REQUEST, keys::JSON_TITLE, keys::JSON_MESSAGE)
            }
            AppError::TypeMismatch { name, value } => ErrorDescriptor::new(
                StatusCode::BAD_REQUEST,
                keys::TYPE_MISMATCH_TITLE,
                keys::TYPE_MISMATCH_MESSAGE,
            )
            .with_args(vec![name.clone(), value.clone()]),
            AppError::MethodNotAllowed(method) => ErrorDescriptor::new(
                StatusCode::METHOD_NOT_ALLOWED,
                keys::METHOD_NOT_ALLOWED_TITLE,
                keys::METHOD_NOT_ALLOWED_MESSAGE,
            )
            .with_args(vec![method.clone()]),
            AppError::NotFound(path) => ErrorDescriptor::new(
                StatusCode::NOT_FOUND,
                keys::NOT_FOUND_TITLE,
                keys::NOT_FOUND_MESSAGE,
            )
            .with_args(vec![path.clone()]),
            AppError::DataIntegrityViolation(_) => ErrorDescriptor::new(
                StatusCode::CONFLICT,
                keys::CONFLICT_TITLE,
                keys::CONFLICT_MESSAGE,
            ),
            AppError::DatabaseError(_) | AppError::InternalError(_) => ErrorDescriptor::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                keys::SERVER_TITLE,
                keys::SERVER_GENERIC,
            ),
        }
    }

    /// 내부 정보가 응답에 섞이면 안 되는 미분류 에러인지 확인합니다.
    pub fn is_unclassified(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }

    /// 운영자를 위한 로그를 남깁니다.
    ///
    /// 미분류 에러는 전체 내용을 `error` 레벨로, 무결성 위반은 메시지만 기록합니다.
    pub fn log(&self, path: &str) {
        if self.is_unclassified() {
            log::error!("처리되지 않은 내부 오류 [{}]: {:?}", path, self);
            return;
        }

        match self {
            AppError::DataIntegrityViolation(message) => {
                log::error!("데이터 무결성 위반 [{}]: {}", path, message);
            }
            _ => log::debug!("요청 처리 실패 [{}]: {}", path, self),
        }
    }

    /// 주어진 로케일로 에러 봉투를 만듭니다.
    ///
    /// 키에 해당하는 번역이 없으면 키 자체가 그대로 사용됩니다.
    pub fn localize(&self, messages: &MessageSource, locale: Locale, path: &str) -> ErrorResponse {
        let descriptor = self.descriptor();

        let title = messages.get_message(
            &descriptor.title_key,
            &[],
            &descriptor.title_key,
            locale,
        );
        let message = messages.get_message(
            &descriptor.message_key,
            &descriptor.args,
            &descriptor.message_key,
            locale,
        );
        let details = descriptor.details.map(|violations| {
            violations
                .into_iter()
                .map(|violation| ErrorDetail {
                    message: messages.get_message(
                        &violation.code,
                        &violation.args,
                        &violation.code,
                        locale,
                    ),
                    field: violation.field,
                })
                .collect()
        });

        ErrorResponse {
            timestamp: Utc::now(),
            status: descriptor.status.as_u16(),
            error: title,
            message,
            path: path.to_string(),
            details,
        }
    }

    /// 로케일이 반영된 HTTP 에러 응답을 생성합니다.
    pub fn to_localized_response(
        &self,
        messages: &MessageSource,
        locale: Locale,
        path: &str,
    ) -> HttpResponse {
        let body = self.localize(messages, locale, path);
        HttpResponse::build(self.descriptor().status).json(body)
    }

    /// 경로 파라미터 역직렬화 실패를 타입 불일치 에러로 변환합니다.
    pub fn from_path_error(error: &PathError, req: &HttpRequest) -> Self {
        let segments = req
            .match_info()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        mismatched_parameter(&error.to_string(), segments)
    }

    /// 쿼리 문자열 역직렬화 실패를 타입 불일치 에러로 변환합니다.
    pub fn from_query_error(error: &QueryPayloadError, req: &HttpRequest) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|query| query.into_inner())
            .unwrap_or_default();

        mismatched_parameter(&error.to_string(), pairs)
    }
}

/// 역직렬화 에러 메시지로 문제가 된 파라미터를 찾습니다.
///
/// 따옴표로 인용된 값, 백틱으로 인용된 이름 순서로 확인하며,
/// 둘 다 없으면 파라미터가 하나뿐일 때만 그 파라미터를 보고합니다.
fn mismatched_parameter(detail: &str, parameters: Vec<(String, String)>) -> AppError {
    let culprit = parameters
        .iter()
        .find(|(_, value)| detail.contains(&format!("\"{}\"", value)))
        .or_else(|| {
            parameters
                .iter()
                .find(|(name, _)| detail.contains(&format!("`{}`", name)))
        })
        .or(match parameters.as_slice() {
            [only] => Some(only),
            _ => None,
        })
        .cloned();

    match culprit {
        Some((name, value)) => AppError::TypeMismatch { name, value },
        None => AppError::MalformedRequest(detail.to_string()),
    }
}

/// 검증 에러를 필드 이름 순으로 정렬된 위반 목록으로 변환합니다.
fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| FieldViolation {
                field: field.to_string(),
                code: error.code.to_string(),
                args: constraint_args(error),
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// 제약 파라미터(`min`, `max`)를 메시지 위치 인자로 꺼냅니다.
fn constraint_args(error: &ValidationError) -> Vec<String> {
    ["min", "max"]
        .iter()
        .filter_map(|name| error.params.get(*name))
        .map(|value| value.to_string())
        .collect()
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::MalformedRequest(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.descriptor().status
    }

    /// 요청 컨텍스트 없이 기본 로케일로 에러 봉투를 생성합니다.
    ///
    /// 미들웨어가 요청의 로케일과 경로로 다시 번역하므로,
    /// 이 응답은 미들웨어 밖에서 렌더링될 때만 클라이언트에 도달합니다.
    fn error_response(&self) -> HttpResponse {
        let messages = MessageSource::default();
        let locale = messages.default_locale();
        self.to_localized_response(&messages, locale, "")
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let users = self.users.read().context("사용자 저장소 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
