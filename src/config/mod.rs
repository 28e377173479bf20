//! # Configuration Module
//!
//! 환경 변수 기반 애플리케이션 설정입니다.
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다. (`main.rs` 참고)

pub mod data_config;
pub mod locale_config;

pub use data_config::*;
pub use locale_config::*;
