//! Google Generative Language API provider.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use super::{fallback, ContentError, ContentProvider};
use crate::error::{Result, TrackerError};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for [`GeminiProvider`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; requests are skipped when unset
    pub api_key: Option<String>,
    /// Model name placed in the request path
    pub model: String,
    /// API root without trailing slash
    pub base_url: String,
    /// Upper bound for a single request
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeminiConfig {
    /// Reads settings from the environment.
    ///
    /// - `GEMINI_API_KEY`, falling back to `API_KEY`
    /// - `PROSPERITAS_MODEL`
    /// - `PROSPERITAS_API_BASE`
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("PROSPERITAS_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("PROSPERITAS_API_BASE")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }
}

/// Content provider backed by the Gemini `generateContent` endpoint.
///
/// Each call makes a single attempt; there are no retries.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

impl GeminiProvider {
    /// Creates a provider with the given settings.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TrackerError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    async fn generate(
        &self,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> std::result::Result<String, ContentError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ContentError::MissingCredentials)?;

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config,
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(ContentError::Empty)
    }
}

fn lesson_prompt(lesson_title: &str, module_title: &str) -> String {
    format!(
        "Escreva, em Markdown, um capítulo didático e aprofundado sobre \"{lesson_title}\", \
         parte do módulo \"{module_title}\" de um curso de educação financeira. \
         Inclua introdução, conceitos fundamentais, exemplos práticos, \
         um resumo ao final e um exercício de aplicação. \
         Foque no longo prazo e evite promessas de dinheiro rápido."
    )
}

const QUOTE_PROMPT: &str = "Gere uma frase curta e poderosa de sabedoria financeira para o dia, \
     focada em longo prazo e disciplina.";

#[async_trait]
impl ContentProvider for GeminiProvider {
    async fn lesson_content(&self, lesson_title: &str, module_title: &str) -> String {
        let config = GenerationConfig {
            temperature: 0.7,
            top_p: 0.95,
        };
        match self
            .generate(lesson_prompt(lesson_title, module_title), Some(config))
            .await
        {
            Ok(text) => text,
            Err(ContentError::MissingCredentials) => {
                debug!("No API key configured; skipping lesson generation");
                fallback::LESSON_MISSING_KEY.to_string()
            }
            Err(ContentError::Empty) => {
                error!("Lesson generation returned no text for '{lesson_title}'");
                fallback::LESSON_EMPTY.to_string()
            }
            Err(e) => {
                error!("Lesson generation failed for '{lesson_title}': {e}");
                fallback::LESSON_ERROR.to_string()
            }
        }
    }

    async fn daily_quote(&self) -> String {
        match self.generate(QUOTE_PROMPT.to_string(), None).await {
            Ok(text) => text.trim().to_string(),
            Err(ContentError::MissingCredentials) => fallback::QUOTE_DEFAULT.to_string(),
            Err(ContentError::Empty) => fallback::QUOTE_EMPTY.to_string(),
            Err(e) => {
                error!("Quote generation failed: {e}");
                fallback::QUOTE_DEFAULT.to_string()
            }
        }
    }
}
