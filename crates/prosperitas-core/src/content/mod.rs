//! Lesson text and daily quotes from a text-generation service.
//!
//! [`ContentProvider`] is the capability the tracker consumes. Its methods
//! never fail: network errors, missing credentials and malformed responses
//! are absorbed by the implementation, which answers with one of the fixed
//! texts in [`fallback`]. Results are opaque display text and never feed
//! back into the progress store.

use async_trait::async_trait;

pub mod fallback;
pub mod gemini;
pub mod static_provider;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use static_provider::StaticProvider;

/// Source of generated lesson content and quotes.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Long-form markdown for a lesson. Always returns some text.
    async fn lesson_content(&self, lesson_title: &str, module_title: &str) -> String;

    /// A short motivational sentence. Always returns some text.
    async fn daily_quote(&self) -> String;
}

/// Failures inside a provider; never leave the provider.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ContentError {
    /// No API key configured
    #[error("API key is not configured")]
    MissingCredentials,

    /// Transport or decoding failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response carried no text
    #[error("Response contained no text")]
    Empty,
}
