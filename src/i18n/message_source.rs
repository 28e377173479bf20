//! 메시지 키 번역기

use actix_web::HttpRequest;

use super::bundles;
use super::locale::{Locale, LocaleResolver};

/// 메시지 키를 로케일별 문장으로 변환하는 핸들
///
/// 조회 순서는 요청 로케일 번들 → 기본 로케일 번들 → 호출자가 넘긴 기본값입니다.
/// 실패하지 않으며, 애플리케이션 전체에서 `Arc`/`web::Data`로 공유됩니다.
#[derive(Debug, Clone, Default)]
pub struct MessageSource {
    resolver: LocaleResolver,
}

impl MessageSource {
    pub fn new(resolver: LocaleResolver) -> Self {
        Self { resolver }
    }

    pub fn default_locale(&self) -> Locale {
        self.resolver.default_locale()
    }

    /// 요청의 로케일을 결정합니다.
    pub fn resolve_locale(&self, req: &HttpRequest) -> Locale {
        self.resolver.resolve(req)
    }

    /// 키에 해당하는 메시지를 찾아 위치 인자(`{0}`, `{1}`, ...)를 채웁니다.
    ///
    /// 어느 번들에도 키가 없으면 `default`를 그대로 반환합니다.
    pub fn get_message(&self, key: &str, args: &[String], default: &str, locale: Locale) -> String {
        bundles::lookup(locale, key)
            .or_else(|| bundles::lookup(self.default_locale(), key))
            .map(|template| format_message(template, args))
            .unwrap_or_else(|| default.to_string())
    }

    /// 인자가 없는 메시지를 조회합니다. 키가 없으면 키 자체를 반환합니다.
    pub fn get(&self, key: &str, locale: Locale) -> String {
        self.get_message(key, &[], key, locale)
    }
}

/// `{n}` 자리표시자를 인자로 치환합니다. 범위를 벗어난 자리표시자는 그대로 둡니다.
fn format_message(template: &str, args: &[String]) -> String {
    let mut formatted = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        formatted.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let argument = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| (arg, close))
        });

        match argument {
            Some((arg, close)) => {
                formatted.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                formatted.push('{');
                rest = after;
            }
        }
    }

    formatted.push_str(rest);
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    #[test]
    fn test_get_message_per_locale() {
        let messages = MessageSource::default();

        assert_eq!(messages.get(keys::WELCOME_MESSAGE, Locale::EN_US), "Welcome to FinSense API!");
        assert_eq!(messages.get(keys::WELCOME_MESSAGE, Locale::PT_BR), "Bem-vindo à API FinSense!");
    }

    #[test]
    fn test_missing_key_returns_default() {
        let messages = MessageSource::default();

        assert_eq!(messages.get("error.does.not.exist", Locale::PT_BR), "error.does.not.exist");
        assert_eq!(
            messages.get_message("nope", &[], "fallback text", Locale::EN_US),
            "fallback text"
        );
    }

    #[test]
    fn test_interpolates_positional_args() {
        let messages = MessageSource::default();
        let args = vec!["id".to_string(), "abc".to_string()];

        assert_eq!(
            messages.get_message(keys::TYPE_MISMATCH_MESSAGE, &args, "", Locale::EN_US),
            "The parameter 'id' received an invalid value 'abc'."
        );
    }

    #[test]
    fn test_format_message_edge_cases() {
        let args = vec!["x".to_string()];

        assert_eq!(format_message("{0}{0}", &args), "xx");
        assert_eq!(format_message("{1} stays", &args), "{1} stays");
        assert_eq!(format_message("{name} and {", &args), "{name} and {");
        assert_eq!(format_message("no placeholders", &[]), "no placeholders");
    }
}
