//! Text translation through a chat-completion backend.
//!
//! The [`Translator`] decides whether a value is prose worth translating,
//! shields placeholders behind positional markers, and falls back to the
//! original text whenever the backend fails. The backend itself sits behind
//! the [`TranslationBackend`] trait so tests (and future backends) can swap
//! the HTTP client out.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::placeholder;
use crate::utils::is_all_upper_case;

/// Instruction sent as the system message on every request.
pub const SYSTEM_PROMPT: &str =
    "Translate English to Chinese. Return only the translation, no explanation.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 2048;

/// A backend that turns English text into Chinese text.
pub trait TranslationBackend {
    fn translate(&self, text: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Blocking HTTP client for an OpenAI-style chat-completion endpoint.
pub struct ChatCompletionClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(endpoint: &str, api_key: &str, model: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

impl TranslationBackend for ChatCompletionClient {
    fn translate(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .context("Translation request failed")?
            .error_for_status()
            .context("Translation backend returned an error status")?;

        let body: ChatResponse = response
            .json()
            .context("Failed to parse translation response")?;

        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .context("Translation response contained no choices")?;

        Ok(content)
    }
}

/// Placeholder-preserving translation pipeline over a backend.
pub struct Translator<B> {
    backend: B,
}

impl<B: TranslationBackend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Translate one string value.
    ///
    /// Values that are not prose (placeholders, code constants, texts shorter
    /// than two non-whitespace characters) are returned unchanged without a
    /// backend call. A backend failure is logged and also yields the original
    /// text: one bad string never fails a batch.
    pub fn translate(&self, text: &str) -> String {
        if !is_prose(text) {
            return text.to_string();
        }

        let (masked, placeholders) = placeholder::mask(text);
        let outbound = if placeholders.is_empty() {
            text
        } else {
            masked.as_str()
        };

        match self.backend.translate(outbound) {
            Ok(translated) => {
                debug!("Translated {:?} -> {:?}", text, translated);
                placeholder::restore(&translated, &placeholders)
            }
            Err(err) => {
                warn!("Translation failed for {:?}: {:#}", text, err);
                text.to_string()
            }
        }
    }
}

/// Whether a value is natural-language text rather than a placeholder or a
/// code token.
fn is_prose(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.chars().count() < 2 {
        return false;
    }
    if placeholder::is_placeholder_only(trimmed) {
        return false;
    }
    if text.starts_with('{') || text.starts_with('%') || text.starts_with("${") {
        return false;
    }
    !is_all_upper_case(text)
}
