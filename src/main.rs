//! FinSense API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 사용자 저장소(MongoDB 또는 메모리), 비밀번호 인코더, 다국어 메시지 소스를
//! 구성한 뒤 회원가입 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use finsense_api::config::{LocaleConfig, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig};
use finsense_api::db::Database;
use finsense_api::i18n::{LocaleResolver, MessageSource};
use finsense_api::middlewares::ErrorTranslation;
use finsense_api::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use finsense_api::routes::configure_all_routes;
use finsense_api::services::users::{BcryptPasswordEncoder, UserRegistrationService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화 (RUST_LOG가 .env 파일에 있을 수 있어 파일을 먼저 로드)
    let (profile, env_file) = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => error!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }

    info!("🚀 FinSense API 시작중...");

    let user_repo = initialize_user_store().await?;

    let encoder = BcryptPasswordEncoder::from_config();
    info!("🔐 bcrypt cost: {}", encoder.cost());

    let registration = web::Data::new(UserRegistrationService::new(user_repo, Arc::new(encoder)));

    let default_locale = LocaleConfig::default_locale();
    info!("🌍 기본 로케일: {}", default_locale);
    let messages = Arc::new(MessageSource::new(LocaleResolver::new(default_locale)));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registration, messages).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 적용 순서 (바깥 → 안쪽):
/// NormalizePath → Logger → CORS → 에러 번역 → Rate Limiting → 라우트
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    registration: web::Data<UserRegistrationService>,
    messages: Arc<MessageSource>,
) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Signup: POST http://{}/api/v1/auth/signup", bind_address);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    HttpServer::new(move || {
        App::new()
            .app_data(registration.clone())
            .app_data(web::Data::from(messages.clone()))
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 에러 번역 (429 응답은 그대로 통과)
            .wrap(ErrorTranslation::new(messages.clone()))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> (String, Result<&'static str, dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    (profile, loaded)
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=finsense_api::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 초기화합니다
///
/// MongoDB를 사용하는 경우 연결 확인과 `email_unique` 인덱스 생성을 마친 뒤 반환합니다.
async fn initialize_user_store() -> io::Result<Arc<dyn UserRepository>> {
    match StorageConfig::backend() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repo = MongoUserRepository::new(Arc::new(database));
            repo.create_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repo))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 사용자 저장소 사용 중 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserRepository::default()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
