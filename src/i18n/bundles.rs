//! 로케일별 메시지 번들
//!
//! 프로세스 시작 후 처음 접근할 때 한 번만 구성되는 읽기 전용 테이블입니다.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::keys;
use super::locale::Locale;

const EN_US: &[(&str, &str)] = &[
    (keys::BUSINESS_RULE_TITLE, "Business Rule Violation"),
    (keys::INSUFFICIENT_FUNDS, "Unable to complete operation due to insufficient balance."),
    (keys::EMAIL_DUPLICATE, "Email is already registered in the system."),
    (keys::VALIDATION_TITLE, "Validation Error"),
    (keys::VALIDATION_MESSAGE, "One or more fields have invalid values. Please check the details."),
    (keys::SERVER_TITLE, "Internal Server Error"),
    (keys::SERVER_GENERIC, "An unexpected error occurred. Please contact support."),
    (keys::JSON_TITLE, "Invalid Format"),
    (keys::JSON_MESSAGE, "The request body is malformed or invalid."),
    (keys::TYPE_MISMATCH_TITLE, "Invalid Parameter Type"),
    (keys::TYPE_MISMATCH_MESSAGE, "The parameter '{0}' received an invalid value '{1}'."),
    (keys::METHOD_NOT_ALLOWED_TITLE, "Method Not Allowed"),
    (keys::METHOD_NOT_ALLOWED_MESSAGE, "The method '{0}' is not supported for this request."),
    (keys::NOT_FOUND_TITLE, "Resource Not Found"),
    (keys::NOT_FOUND_MESSAGE, "The resource '{0}' was not found."),
    (keys::CONFLICT_TITLE, "Data Conflict"),
    (keys::CONFLICT_MESSAGE, "The operation cannot be completed due to a data conflict."),
    (keys::WELCOME_MESSAGE, "Welcome to FinSense API!"),
    (keys::NOT_EMPTY, "must not be empty"),
    (keys::SIZE_MAX, "size must be at most {0} characters"),
    (keys::EMAIL_INVALID, "must be a well-formed email address"),
    (
        keys::PASSWORD_WEAK,
        "Password must be at least 10 characters long and include an uppercase letter, a lowercase letter, a digit and a special character (@#$!%*?&._-), without spaces.",
    ),
];

const PT_BR: &[(&str, &str)] = &[
    (keys::BUSINESS_RULE_TITLE, "Violação de Regra de Negócio"),
    (keys::INSUFFICIENT_FUNDS, "Não foi possível concluir a operação por saldo insuficiente."),
    (keys::EMAIL_DUPLICATE, "E-mail já cadastrado no sistema."),
    (keys::VALIDATION_TITLE, "Erro de Validação"),
    (keys::VALIDATION_MESSAGE, "Um ou mais campos possuem valores inválidos. Verifique os detalhes."),
    (keys::SERVER_TITLE, "Erro Interno do Servidor"),
    (keys::SERVER_GENERIC, "Ocorreu um erro inesperado. Entre em contato com o suporte."),
    (keys::JSON_TITLE, "Formato Inválido"),
    (keys::JSON_MESSAGE, "O corpo da requisição está malformado ou é inválido."),
    (keys::TYPE_MISMATCH_TITLE, "Tipo de Parâmetro Inválido"),
    (keys::TYPE_MISMATCH_MESSAGE, "O parâmetro '{0}' recebeu um valor inválido '{1}'."),
    (keys::METHOD_NOT_ALLOWED_TITLE, "Método Não Permitido"),
    (keys::METHOD_NOT_ALLOWED_MESSAGE, "O método '{0}' não é suportado para esta requisição."),
    (keys::NOT_FOUND_TITLE, "Recurso Não Encontrado"),
    (keys::NOT_FOUND_MESSAGE, "O recurso '{0}' não foi encontrado."),
    (keys::CONFLICT_TITLE, "Conflito de Dados"),
    (keys::CONFLICT_MESSAGE, "A operação não pode ser concluída devido a um conflito de dados."),
    (keys::WELCOME_MESSAGE, "Bem-vindo à API FinSense!"),
    (keys::NOT_EMPTY, "não deve estar vazio"),
    (keys::SIZE_MAX, "o tamanho deve ser no máximo {0} caracteres"),
    (keys::EMAIL_INVALID, "deve ser um endereço de e-mail bem formado"),
    (
        keys::PASSWORD_WEAK,
        "A senha deve ter no mínimo 10 caracteres, com letra maiúscula, letra minúscula, número e caractere especial (@#$!%*?&._-), sem espaços.",
    ),
];

static BUNDLES: Lazy<HashMap<Locale, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    let mut bundles = HashMap::new();
    bundles.insert(Locale::EN_US, EN_US.iter().copied().collect());
    bundles.insert(Locale::PT_BR, PT_BR.iter().copied().collect());
    bundles
});

/// 로케일 번들에서 메시지 템플릿을 찾습니다.
pub(super) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    BUNDLES
        .get(&locale)
        .and_then(|bundle| bundle.get(key))
        .copied()
}
