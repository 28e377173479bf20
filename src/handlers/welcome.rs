use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::i18n::{keys, MessageSource};

/// `GET /api/v1/welcome`
///
/// `Accept-Language`에 맞춘 환영 메시지를 일반 텍스트로 반환합니다.
pub async fn welcome(req: HttpRequest, messages: web::Data<MessageSource>) -> HttpResponse {
    let locale = messages.resolve_locale(&req);

    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(messages.get(keys::WELCOME_MESSAGE, locale))
}
