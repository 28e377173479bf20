//! # Core Module
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (태그드 유니온)
//! - **BusinessRuleError**: 상태 코드와 메시지 키를 직접 들고 다니는 도메인 규칙 위반
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, 로케일별 에러 봉투 생성
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트를 붙여 `AppError`로 변환
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `@RestControllerAdvice` | `ErrorTranslation` 미들웨어 + `AppError::localize` |
//! | `MessageSource.getMessage` | `i18n::MessageSource::get_message` |
//! | `BusinessException` 하위 타입 | `BusinessRuleError` 생성자 (`duplicate_email()`) |

pub mod errors;

pub use errors::*;
