//! 사용자 관련 서비스

pub mod password_encoder;
pub mod user_service;

pub use password_encoder::{BcryptPasswordEncoder, PasswordEncoder};
pub use user_service::UserRegistrationService;
