//! 로케일 정의와 `Accept-Language` 기반 로케일 결정

use std::fmt;

use actix_web::http::header::{AcceptLanguage, Header, LanguageTag, Preference};
use actix_web::HttpRequest;

/// 지원하는 로케일 (언어 + 지역)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    language: &'static str,
    region: &'static str,
}

impl Locale {
    pub const EN_US: Locale = Locale { language: "en", region: "US" };
    pub const PT_BR: Locale = Locale { language: "pt", region: "BR" };

    /// 번들이 준비된 로케일 목록
    pub const SUPPORTED: [Locale; 2] = [Locale::EN_US, Locale::PT_BR];

    /// `en-US`, `pt_BR` 같은 태그를 지원 로케일로 변환합니다. (대소문자 무시)
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next()?;
        let region = parts.next();

        Self::SUPPORTED.into_iter().find(|locale| {
            locale.matches(language, region)
        })
    }

    fn matches(&self, language: &str, region: Option<&str>) -> bool {
        self.language.eq_ignore_ascii_case(language)
            && region.is_some_and(|region| self.region.eq_ignore_ascii_case(region))
    }

    fn matches_language(&self, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language, self.region)
    }
}

/// 요청 헤더로부터 응답 로케일을 결정하는 리졸버
///
/// 품질값(q) 순서로 선호 언어를 확인하며, 정확히 일치하는 지원 로케일을 우선하고
/// 없으면 주 언어만 일치하는 로케일을 사용합니다. 둘 다 없으면 기본 로케일입니다.
///
/// ```rust,ignore
/// let resolver = LocaleResolver::new(Locale::EN_US);
/// let locale = resolver.resolve(&req); // "pt-PT,pt;q=0.9" → pt-BR
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver {
    default_locale: Locale,
}

impl LocaleResolver {
    pub fn new(default_locale: Locale) -> Self {
        Self { default_locale }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// 요청의 `Accept-Language` 헤더로 로케일을 결정합니다.
    pub fn resolve(&self, req: &HttpRequest) -> Locale {
        match AcceptLanguage::parse(req) {
            Ok(header) => self.resolve_preferences(&header.ranked()),
            Err(_) => self.default_locale,
        }
    }

    fn resolve_preferences(&self, preferences: &[Preference<LanguageTag>]) -> Locale {
        let tags: Vec<&LanguageTag> = preferences
            .iter()
            .filter_map(|preference| match preference {
                Preference::Specific(tag) => Some(tag),
                Preference::Any => None,
            })
            .collect();

        let exact = tags.iter().find_map(|tag| {
            Locale::SUPPORTED
                .into_iter()
                .find(|locale| locale.matches(tag.primary_language(), tag.region()))
        });
        if let Some(locale) = exact {
            return locale;
        }

        tags.iter()
            .find_map(|tag| {
                Locale::SUPPORTED
                    .into_iter()
                    .find(|locale| locale.matches_language(tag.primary_language()))
            })
            .unwrap_or(self.default_locale)
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::ACCEPT_LANGUAGE;
    use actix_web::test::TestRequest;

    fn resolve(header: Option<&str>) -> Locale {
        let mut request = TestRequest::default();
        if let Some(value) = header {
            request = request.insert_header((ACCEPT_LANGUAGE, value));
        }
        LocaleResolver::default().resolve(&request.to_http_request())
    }

    #[test]
    fn test_missing_header_uses_default() {
        assert_eq!(resolve(None), Locale::EN_US);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(resolve(Some("pt-BR")), Locale::PT_BR);
        assert_eq!(resolve(Some("en-US")), Locale::EN_US);
    }

    #[test]
    fn test_primary_language_match() {
        assert_eq!(resolve(Some("pt")), Locale::PT_BR);
        assert_eq!(resolve(Some("pt-PT")), Locale::PT_BR);
    }

    #[test]
    fn test_unsupported_language_uses_default() {
        assert_eq!(resolve(Some("ko-KR")), Locale::EN_US);
        assert_eq!(resolve(Some("*")), Locale::EN_US);
    }

    #[test]
    fn test_quality_ordering() {
        assert_eq!(resolve(Some("en;q=0.5, pt-BR;q=0.9")), Locale::PT_BR);
        assert_eq!(resolve(Some("fr-FR, pt;q=0.8, en-US;q=0.7")), Locale::EN_US);
    }

    #[test]
    fn test_configured_default_locale() {
        let resolver = LocaleResolver::new(Locale::PT_BR);
        let req = TestRequest::default().to_http_request();

        assert_eq!(resolver.resolve(&req), Locale::PT_BR);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("pt_BR"), Some(Locale::PT_BR));
        assert_eq!(Locale::from_tag("EN-us"), Some(Locale::EN_US));
        assert_eq!(Locale::from_tag("pt"), None);
        assert_eq!(Locale::from_tag("de-DE"), None);
        assert_eq!(Locale::PT_BR.to_string(), "pt-BR");
    }
}
