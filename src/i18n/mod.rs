//! # Internationalization
//!
//! 에러 봉투와 환영 메시지에 사용되는 다국어 메시지 처리 모듈입니다.
//!
//! - [`Locale`] / [`LocaleResolver`]: `Accept-Language` 헤더로 호출자의 로케일 결정
//! - [`MessageSource`]: 메시지 키 → 로케일별 문장 (위치 인자 `{0}`, `{1}` 보간)
//! - [`keys`]: 코드 전반에서 사용하는 메시지 키 상수
//!
//! 지원 로케일은 `en-US`(기본)와 `pt-BR`입니다.

mod bundles;
pub mod keys;
mod locale;
mod message_source;

pub use locale::{Locale, LocaleResolver};
pub use message_source::MessageSource;
