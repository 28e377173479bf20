use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::services::users::UserRegistrationService;

/// `POST /api/v1/auth/signup`
///
/// 검증에 실패하면 필드별 상세가 담긴 400 응답이, 이메일이 이미 등록되어 있으면
/// 409 응답이 에러 번역 미들웨어를 통해 반환됩니다.
pub async fn signup(
    payload: web::Json<RegisterUserRequest>,
    service: web::Data<UserRegistrationService>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let response = service.register_user(request).await?;

    log::info!("사용자 생성 완료 [ID: {}]", response.id_user);
    // TODO: 메일 발송 서비스가 생기면 여기서 가입 확인 메일 요청을 큐에 넣기
    log::info!("가입 확인 메일 발송 대기: {}", response.email);

    Ok(HttpResponse::Created().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE};
    use actix_web::http::{Method, StatusCode};
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::repositories::users::{InMemoryUserRepository, UserRepository};
    use crate::test_utils::{read_error, test_app, RacingUserRepository};

    const SIGNUP: &str = "/api/v1/auth/signup";

    fn memory_repo() -> Arc<InMemoryUserRepository> {
        Arc::new(InMemoryUserRepository::default())
    }

    fn valid_payload(email: &str) -> Value {
        json!({ "name": "Maria Silva", "email": email, "password": "Strong@1234" })
    }

    #[actix_web::test]
    async fn test_signup_creates_pending_user() {
        let repo = memory_repo();
        let app = test::init_service(test_app(repo.clone())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(valid_payload("Maria@Email.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["idUser"].as_str().is_some());
        assert_eq!(body["name"], "Maria Silva");
        assert_eq!(body["email"], "maria@email.com");
        assert_eq!(body["status"], "PENDING");
        assert!(body.get("password").is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_duplicate_email_is_conflict() {
        let repo = memory_repo();
        let app = test::init_service(test_app(repo.clone())).await;

        let first = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(valid_payload("maria@email.com"))
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let second = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(valid_payload("MARIA@email.com"))
            .to_request();
        let resp = test::call_service(&app, second).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = read_error(resp).await;
        assert_eq!(body.status, 409);
        assert_eq!(body.error, "Data Conflict");
        assert_eq!(body.message, "Email is already registered in the system.");
        assert_eq!(body.path, SIGNUP);
        assert!(body.details.is_none());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_signup_weak_password() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(json!({ "name": "User Weak", "email": "weak@email.com", "password": "123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Validation Error");
        assert_eq!(body.message, "One or more fields have invalid values. Please check the details.");
        let details = body.details.expect("details");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "password");
    }

    #[actix_web::test]
    async fn test_signup_empty_object_reports_every_field() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        let fields: Vec<String> = body
            .details
            .expect("details")
            .into_iter()
            .map(|detail| detail.field)
            .collect();
        for field in ["email", "name", "password"] {
            let entries = fields.iter().filter(|f| *f == field).count();
            assert_eq!(entries, 1, "{} entries: {:?}", field, fields);
        }
    }

    #[actix_web::test]
    async fn test_signup_null_name_is_validation_error() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(json!({ "name": null, "email": "maria@email.com", "password": "Strong@1234" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Validation Error");
        let details = body.details.expect("details");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "name");
        assert_eq!(details[0].message, "must not be empty");
    }

    #[actix_web::test]
    async fn test_signup_validation_details_in_portuguese() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .insert_header((ACCEPT_LANGUAGE, "pt-BR"))
            .set_json(json!({ "name": "", "email": "maria@email.com", "password": "Strong@1234" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Erro de Validação");
        let details = body.details.expect("details");
        assert_eq!(details[0].field, "name");
        assert_eq!(details[0].message, "não deve estar vazio");
    }

    #[actix_web::test]
    async fn test_signup_malformed_json() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{ \"name\": \"Maria\", ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Invalid Format");
        assert_eq!(body.message, "The request body is malformed or invalid.");
        assert!(body.details.is_none());
    }

    #[actix_web::test]
    async fn test_signup_missing_body() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .insert_header((CONTENT_TYPE, "application/json"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Invalid Format");
        assert!(body.details.is_none());
    }

    #[actix_web::test]
    async fn test_signup_wrong_shape_is_malformed() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(json!({ "name": ["Maria"], "email": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Invalid Format");
    }

    #[actix_web::test]
    async fn test_signup_rejects_get() {
        let app = test::init_service(test_app(memory_repo())).await;

        let req = test::TestRequest::default()
            .method(Method::GET)
            .uri(SIGNUP)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = read_error(resp).await;
        assert_eq!(body.message, "The method 'GET' is not supported for this request.");
    }

    #[actix_web::test]
    async fn test_signup_race_surfaces_data_conflict() {
        let repo: Arc<dyn UserRepository> = Arc::new(RacingUserRepository);
        let app = test::init_service(test_app(repo)).await;

        let req = test::TestRequest::post()
            .uri(SIGNUP)
            .set_json(valid_payload("maria@email.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = read_error(resp).await;
        assert_eq!(body.error, "Data Conflict");
        assert_eq!(body.message, "The operation cannot be completed due to a data conflict.");
    }
}
