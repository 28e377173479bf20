//! 라우팅 실패 처리
//!
//! 메서드 불일치(405)와 존재하지 않는 경로(404)를 `AppError`로 올려
//! 다른 실패와 동일하게 에러 번역 미들웨어에서 응답을 만들도록 합니다.

use actix_web::{HttpRequest, HttpResponse};

use crate::core::errors::AppError;

/// 경로는 존재하지만 메서드가 맞지 않는 경우
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(req.method().to_string()))
}

/// 어떤 라우트와도 일치하지 않는 경우
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}
