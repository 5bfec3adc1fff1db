//! Deterministic offline provider.

use async_trait::async_trait;

use super::{fallback, ContentProvider};

/// Provider returning fixed texts without any network access.
///
/// Used for offline runs and as a fake in tests. Lesson text is a short
/// markdown stub naming the lesson and module unless a fixed body is set.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    lesson_body: Option<String>,
    quote: String,
}

impl StaticProvider {
    /// Creates a provider answering with the built-in fallback quote.
    pub fn new() -> Self {
        Self {
            lesson_body: None,
            quote: fallback::QUOTE_DEFAULT.to_string(),
        }
    }

    /// Answer every lesson request with this body.
    pub fn with_lesson_body(mut self, body: impl Into<String>) -> Self {
        self.lesson_body = Some(body.into());
        self
    }

    /// Answer quote requests with this text.
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentProvider for StaticProvider {
    async fn lesson_content(&self, lesson_title: &str, module_title: &str) -> String {
        match &self.lesson_body {
            Some(body) => body.clone(),
            None => format!(
                "# {lesson_title}\n\n_{module_title}_\n\nConteúdo indisponível no modo offline."
            ),
        }
    }

    async fn daily_quote(&self) -> String {
        self.quote.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_texts() {
        let provider = StaticProvider::new();
        let lesson = provider.lesson_content("Hábitos de 1%", "O Despertar da Riqueza").await;
        assert!(lesson.starts_with("# Hábitos de 1%"));
        assert!(lesson.contains("O Despertar da Riqueza"));
        assert_eq!(provider.daily_quote().await, fallback::QUOTE_DEFAULT);
    }

    #[tokio::test]
    async fn test_configured_texts() {
        let provider = StaticProvider::new()
            .with_lesson_body("body")
            .with_quote("quote");
        assert_eq!(provider.lesson_content("a", "b").await, "body");
        assert_eq!(provider.daily_quote().await, "quote");
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let provider: Box<dyn ContentProvider> = Box::new(StaticProvider::new().with_quote("q"));
        assert_eq!(provider.daily_quote().await, "q");
    }
}
