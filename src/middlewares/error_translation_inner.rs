use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::http::{Method, StatusCode};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::i18n::{Locale, MessageSource};

pub struct ErrorTranslationService<S> {
    pub service: Rc<S>,
    pub messages: Arc<MessageSource>,
}

impl<S, B> Service<ServiceRequest> for ErrorTranslationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let messages = self.messages.clone();

        // 라우터가 요청을 단독 소유해야 하므로 HttpRequest는 복제하지 않음
        let context = RequestContext {
            locale: messages.resolve_locale(req.request()),
            method: req.method().clone(),
            path: req.path().to_string(),
        };

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    // 에러가 실린 응답만 교체
                    let translated = res
                        .response()
                        .error()
                        .and_then(|err| translate(err, &context, &messages));

                    match translated {
                        Some(response) => {
                            let (req, _) = res.into_parts();
                            Ok(ServiceResponse::new(req, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => match translate(&err, &context, &messages) {
                    Some(response) => Err(InternalError::from_response(err, response).into()),
                    None => Err(err),
                },
            }
        })
    }
}

struct RequestContext {
    locale: Locale,
    method: Method,
    path: String,
}

/// 에러를 번역된 응답으로 바꿉니다.
///
/// 요청 제한(429) 응답은 그대로 통과시키기 위해 `None`을 반환합니다.
fn translate(err: &Error, context: &RequestContext, messages: &MessageSource) -> Option<HttpResponse> {
    let path = context.path.as_str();

    match err.as_error::<AppError>() {
        Some(app_error) => {
            app_error.log(path);
            Some(app_error.to_localized_response(messages, context.locale, path))
        }
        None if err.as_response_error().status_code() == StatusCode::TOO_MANY_REQUESTS => None,
        None => {
            log::error!("처리되지 않은 내부 오류 [{} {}]: {:?}", context.method, path, err);
            let internal = AppError::InternalError(err.to_string());
            Some(internal.to_localized_response(messages, context.locale, path))
        }
    }
}
