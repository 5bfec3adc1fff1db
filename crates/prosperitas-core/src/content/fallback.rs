//! Fixed texts returned when generation is unavailable.

/// Lesson text when no API key is configured.
pub const LESSON_MISSING_KEY: &str =
    "A chave de API não foi configurada. Entre em contato com o suporte.";

/// Lesson text when the service answered without content.
pub const LESSON_EMPTY: &str = "Desculpe, não conseguimos carregar este conteúdo agora.";

/// Lesson text when the service could not be reached.
pub const LESSON_ERROR: &str = "Erro ao conectar com a base de conhecimento. \
     Verifique sua conexão ou a validade da sua chave de API.";

/// Quote when no key is configured or the service failed.
pub const QUOTE_DEFAULT: &str = "O sucesso financeiro é o resultado de pequenos hábitos diários.";

/// Quote when the service answered without content.
pub const QUOTE_EMPTY: &str = "O tempo é o maior aliado do investidor disciplinado.";
