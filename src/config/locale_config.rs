//! 로케일 설정

use std::env;

use crate::i18n::Locale;

pub struct LocaleConfig;

impl LocaleConfig {
    /// `DEFAULT_LOCALE` 환경 변수(`en-US`, `pt-BR`)로 기본 로케일을 결정합니다.
    ///
    /// 설정되지 않았거나 지원하지 않는 값이면 `en-US`입니다.
    pub fn default_locale() -> Locale {
        Self::parse(env::var("DEFAULT_LOCALE").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Locale {
        match value {
            Some(tag) => Locale::from_tag(tag).unwrap_or_else(|| {
                log::warn!("지원하지 않는 DEFAULT_LOCALE 값: {}, en-US 사용", tag);
                Locale::default()
            }),
            None => Locale::default(),
        }
    }
}
