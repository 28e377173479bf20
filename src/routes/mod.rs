//! # Route Configuration
//!
//! 애플리케이션의 모든 라우트와 추출기 설정을 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/health` | 헬스 체크 |
//! | POST | `/api/v1/auth/signup` | [`handlers::auth::signup`] |
//! | GET | `/api/v1/welcome` | [`handlers::welcome::welcome`] |
//!
//! 등록된 경로에 다른 메서드로 요청하면 405, 등록되지 않은 경로는 404 에러 봉투가 반환됩니다.

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(resource("/health").route(web::get().to(health_check)));

    configure_auth_routes(cfg);
    configure_welcome_routes(cfg);

    cfg.default_service(web::to(handlers::fallback::not_found));
}

/// 추출기 실패를 `AppError`로 변환하도록 설정합니다.
///
/// - JSON 본문 오류 → `MalformedRequest`
/// - 경로/쿼리 파라미터 역직렬화 오류 → `TypeMismatch`
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| AppError::from(err).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, req| AppError::from_path_error(&err, req).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, req| AppError::from_query_error(&err, req).into()),
    );
}

/// 지원하지 않는 메서드에 405를 응답하는 리소스를 생성합니다.
pub fn resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::to(handlers::fallback::method_not_allowed))
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(resource("/signup").route(web::post().to(handlers::auth::signup))),
    );
}

fn configure_welcome_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(resource("/api/v1/welcome").route(web::get().to(handlers::welcome::welcome)));
}

async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "finsense_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "locales": ["en-US", "pt-BR"]
        }
    }))
}
