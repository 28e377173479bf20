//! 표준 에러 응답 봉투
//!
//! ```json
//! {
//!   "timestamp": "2025-01-01T12:00:00Z",
//!   "status": 400,
//!   "error": "Validation Error",
//!   "message": "One or more fields have invalid values. Please check the details.",
//!   "path": "/api/v1/auth/signup",
//!   "details": [{ "field": "password", "message": "..." }]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// 번역된 에러 제목
    pub error: String,
    pub message: String,
    pub path: String,
    /// 필드 검증 실패일 때만 존재
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}
