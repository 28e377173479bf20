//! 실행 환경, 서버, 저장소 및 보안 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 값이 없거나 잘못된 경우 기본값을 사용합니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//! | `BCRYPT_COST` | 환경별 (4/4/10/12) | bcrypt cost (4-15) |
//! | `HOST` / `PORT` | `0.0.0.0` / `8080` | 바인딩 주소 |
//! | `USER_STORE` | `mongodb` | 사용자 저장소 (`mongodb`, `memory`) |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` | 요청 제한 |

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 감지합니다.
    /// 설정되지 않은 경우 `Production`입니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    /// 알 수 없는 값은 `Production`으로 취급합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    const MIN_COST: u32 = 4;
    const MAX_COST: u32 = 15;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 숫자이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::resolve_cost(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    fn resolve_cost(configured: Option<&str>, env: &Environment) -> u32 {
        configured
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env))
    }

    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 기본값: "0.0.0.0" (모든 인터페이스)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 요청 제한(rate limit) 설정
pub struct RateLimitConfig;

impl RateLimitConfig {
    pub fn per_second() -> u64 {
        Self::read("RATE_LIMIT_PER_SECOND", 100)
    }

    pub fn burst_size() -> u32 {
        Self::read("RATE_LIMIT_BURST_SIZE", 200)
    }

    fn read<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    /// 알 수 없는 값은 `MongoDb`로 취급합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 저장소 선택 설정
pub struct StorageConfig;

impl StorageConfig {
    /// `USER_STORE` 환경 변수로 사용자 저장소를 결정합니다.
    pub fn backend() -> StorageBackend {
        env::var("USER_STORE")
            .map(|value| StorageBackend::from_str(&value))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_configured_bcrypt_cost_must_be_in_range() {
        let env = Environment::Production;

        assert_eq!(PasswordConfig::resolve_cost(Some("8"), &env), 8);
        assert_eq!(PasswordConfig::resolve_cost(Some("3"), &env), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("16"), &env), 12);
        assert_eq!(PasswordConfig::resolve_cost(Some("abc"), &env), 12);
        assert_eq!(PasswordConfig::resolve_cost(None, &Environment::Test), 4);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("In-Memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
