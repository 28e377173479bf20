//! 테스트 공용 도구

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App};
use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::errors::ErrorResponse;
use crate::domain::entities::users::user::User;
use crate::i18n::MessageSource;
use crate::middlewares::ErrorTranslation;
use crate::repositories::users::UserRepository;
use crate::routes::configure_all_routes;
use crate::services::users::{PasswordEncoder, UserRegistrationService};

/// 해싱 호출 횟수를 세는 빠른 가짜 인코더
#[derive(Debug, Default)]
pub struct CountingPasswordEncoder {
    calls: AtomicUsize,
}

impl CountingPasswordEncoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordEncoder for CountingPasswordEncoder {
    fn encode(&self, raw_password: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("encoded:{}", raw_password.len()))
    }
}

/// 중복 확인은 통과하지만 저장 시점에 유니크 인덱스 위반이 나는 저장소
///
/// 같은 이메일로 동시에 가입한 두 요청 중 늦은 쪽이 보게 되는 상황입니다.
pub struct RacingUserRepository;

#[async_trait]
impl UserRepository for RacingUserRepository {
    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Ok(false)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        Err(AppError::DataIntegrityViolation(format!(
            "E11000 duplicate key error collection: users index: email_unique dup key: {{ email: \"{}\" }}",
            user.email
        )))
    }
}

/// 메모리 저장소와 가짜 인코더로 구성한 전체 애플리케이션
pub fn test_app(
    user_repo: Arc<dyn UserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let messages = Arc::new(MessageSource::default());
    let registration =
        UserRegistrationService::new(user_repo, Arc::new(CountingPasswordEncoder::default()));

    App::new()
        .app_data(web::Data::new(registration))
        .app_data(web::Data::from(messages.clone()))
        .wrap(ErrorTranslation::new(messages))
        .configure(configure_all_routes)
}

/// 응답 본문을 에러 봉투로 읽습니다.
pub async fn read_error<B: MessageBody>(resp: ServiceResponse<B>) -> ErrorResponse {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("error envelope")
}
