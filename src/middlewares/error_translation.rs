//! # 에러 번역 미들웨어
//!
//! 애플리케이션 전체를 감싸는 단일 에러 변환 지점입니다.
//! 핸들러, 추출기(JSON/Path/Query), 라우팅 어디에서 발생한 실패든
//! 응답에 에러가 실려 있으면 요청의 로케일과 경로로 번역된 [`ErrorResponse`] 봉투로 교체합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Request ──▶ ErrorTranslation ──▶ Handler
//!                    │                 │
//!                    │◀── Response ────┘ (response.error() 확인)
//!                    │
//!                    ├─ AppError      → 분류 + 로케일 번역
//!                    ├─ 기타 actix 에러 → 500 (상세 내용은 로그에만)
//!                    └─ 에러 없음       → 원본 응답 그대로
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let messages = Arc::new(MessageSource::new(LocaleResolver::new(Locale::EN_US)));
//!
//! App::new()
//!     .app_data(web::Data::from(messages.clone()))
//!     .wrap(ErrorTranslation::new(messages))
//!     .configure(configure_all_routes)
//! ```
//!
//! [`ErrorResponse`]: crate::domain::dto::errors::ErrorResponse

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::i18n::MessageSource;
use crate::middlewares::error_translation_inner::ErrorTranslationService;

pub struct ErrorTranslation {
    messages: Arc<MessageSource>,
}

impl ErrorTranslation {
    pub fn new(messages: Arc<MessageSource>) -> Self {
        Self { messages }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorTranslation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorTranslationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorTranslationService {
            service: Rc::new(service),
            messages: self.messages.clone(),
        }))
    }
}
