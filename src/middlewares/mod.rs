//! # HTTP Middlewares
//!
//! - [`ErrorTranslation`]: 모든 실패를 로케일이 반영된 표준 에러 봉투로 변환

pub mod error_translation;
mod error_translation_inner;

pub use error_translation::ErrorTranslation;
