//! Translator session
//!
//! Holds what the translator window shows (input, output, language pair and
//! error state) and wires the provider to the history store.
//!
//! `translate` borrows the session mutably across the request, so a second
//! translation cannot start while one is in flight.

use std::sync::Arc;

use crate::core::history::HistoryStore;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::UserPreferences;
use crate::shared::types::{NewTranslation, TranslateRequest, TranslationRecord};

use super::client::TranslationProvider;
use super::languages::{normalize_code, resolve_language, AUTO};

/// Longest input accepted, in characters
pub const MAX_INPUT_CHARS: usize = 5000;

pub const ERR_EMPTY_INPUT: &str = "Please enter text to translate";

pub struct TranslatorSession {
    provider: Arc<dyn TranslationProvider>,
    history: HistoryStore,
    pub input: String,
    pub source: String,
    pub target: String,
    translated: String,
    error: Option<String>,
}

impl TranslatorSession {
    pub fn new(provider: Arc<dyn TranslationProvider>, history: HistoryStore, preferences: &UserPreferences) -> Self {
        Self {
            provider,
            history,
            input: String::new(),
            source: preferences.default_source_lang.clone(),
            target: preferences.default_target_lang.clone(),
            translated: String::new(),
            error: None,
        }
    }

    /// Translate the current input and record it in history.
    ///
    /// Empty or oversized input is rejected before any request is made.
    pub async fn translate(&mut self) -> AppResult<TranslationRecord> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Err(self.fail(AppError::Validation(ERR_EMPTY_INPUT.to_string())));
        }
        if text.chars().count() > MAX_INPUT_CHARS {
            return Err(self.fail(AppError::Validation(format!(
                "Text is too long (maximum {} characters)",
                MAX_INPUT_CHARS
            ))));
        }

        self.error = None;
        self.source = normalize_code(&self.source);
        self.target = normalize_code(&self.target);

        let request = TranslateRequest {
            text: text.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
        };
        let result = self.provider.translate(&request).await;

        match result {
            Ok(response) => {
                self.translated = response.translated_text.clone();
                let record = self.history.add(NewTranslation {
                    source_text: text,
                    translated_text: response.translated_text,
                    source_language: resolve_language(&self.source),
                    target_language: resolve_language(&self.target),
                });
                tracing::info!(id = %record.id, source = %self.source, target = %self.target, "translation succeeded");
                Ok(record)
            }
            Err(e) => {
                self.translated.clear();
                Err(self.fail(e))
            }
        }
    }

    fn fail(&mut self, err: AppError) -> AppError {
        tracing::warn!(error = %err, "translation failed");
        self.error = Some(err.to_string());
        err
    }

    /// Swap source and target, feeding the last output back as input.
    /// Does nothing while the source is `auto`.
    pub fn swap_languages(&mut self) {
        if self.source == AUTO {
            return;
        }

        std::mem::swap(&mut self.source, &mut self.target);
        self.input = std::mem::take(&mut self.translated);
    }

    pub async fn detect_language(&self) -> AppResult<String> {
        self.provider.detect_language(&self.input).await
    }

    pub fn translated(&self) -> &str {
        &self.translated
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &[TranslationRecord] {
        self.history.list()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::{InMemoryStore, KeyValueStore, HISTORY_KEY};
    use crate::shared::types::{Language, TranslateResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider returning a fixed outcome and recording requests
    struct FakeProvider {
        outcome: AppResult<TranslateResponse>,
        requests: Mutex<Vec<TranslateRequest>>,
    }

    impl FakeProvider {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(TranslateResponse { translated_text: text.to_string() }),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: AppError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(err),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<TranslateRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationProvider for FakeProvider {
        async fn translate(&self, request: &TranslateRequest) -> AppResult<TranslateResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    fn session(provider: Arc<FakeProvider>, storage: Arc<InMemoryStore>) -> TranslatorSession {
        let history = HistoryStore::load(storage);
        TranslatorSession::new(provider, history, &UserPreferences::default())
    }

    #[tokio::test]
    async fn test_translate_records_history() {
        let provider = FakeProvider::ok("नमस्ते");
        let storage = Arc::new(InMemoryStore::new());
        let mut session = session(provider.clone(), storage.clone());
        session.input = "  hello ".to_string();

        let record = session.translate().await.unwrap();

        assert_eq!(session.translated(), "नमस्ते");
        assert_eq!(session.error(), None);

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, "hello");
        assert_eq!(calls[0].source, "auto");
        assert_eq!(calls[0].target, "hi");

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0], record);
        assert_eq!(record.source_text, "hello");
        assert_eq!(record.translated_text, "नमस्ते");
        assert_eq!(record.source_language, Language::new("auto", "Detect Language"));
        assert_eq!(record.target_language, Language::new("hi", "Hindi"));
        assert!(storage.get(HISTORY_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_without_request() {
        let provider = FakeProvider::ok("unused");
        let mut session = session(provider.clone(), Arc::new(InMemoryStore::new()));

        for input in ["", "   \n\t"] {
            session.input = input.to_string();
            let err = session.translate().await.unwrap_err();
            assert_eq!(err, AppError::Validation(ERR_EMPTY_INPUT.to_string()));
        }

        assert!(provider.calls().is_empty());
        assert!(session.history().is_empty());
        assert_eq!(session.error(), Some(ERR_EMPTY_INPUT));
    }

    #[tokio::test]
    async fn test_oversized_input_is_rejected() {
        let provider = FakeProvider::ok("unused");
        let mut session = session(provider.clone(), Arc::new(InMemoryStore::new()));
        session.input = "a".repeat(MAX_INPUT_CHARS + 1);

        let err = session.translate().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_input_limit_counts_chars_after_trim() {
        let provider = FakeProvider::ok("ok");
        let mut session = session(provider.clone(), Arc::new(InMemoryStore::new()));
        // 5000 two-byte chars plus surrounding whitespace is within the limit
        session.input = format!("  {}  ", "é".repeat(MAX_INPUT_CHARS));

        session.translate().await.unwrap();
        assert_eq!(provider.calls()[0].text.chars().count(), MAX_INPUT_CHARS);
    }

    #[tokio::test]
    async fn test_failure_clears_output_and_keeps_history() {
        let provider = FakeProvider::failing(AppError::Network("Translation failed: Bad Gateway".to_string()));
        let mut session = session(provider, Arc::new(InMemoryStore::new()));
        session.input = "hello".to_string();
        session.translated = "stale".to_string();

        let err = session.translate().await.unwrap_err();

        assert!(err.is_user_visible());
        assert_eq!(session.translated(), "");
        assert_eq!(session.error(), Some("Translation failed: Bad Gateway"));
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_target_code_named_unknown() {
        let mut session = session(FakeProvider::ok("x"), Arc::new(InMemoryStore::new()));
        session.input = "hello".to_string();
        session.target = "zz-bogus".to_string();

        let record = session.translate().await.unwrap();
        assert_eq!(record.target_language, Language::new("zz-bogus", "Unknown"));
    }

    #[tokio::test]
    async fn test_codes_normalized_for_request_and_record() {
        let provider = FakeProvider::ok("bonjour");
        let mut session = session(provider.clone(), Arc::new(InMemoryStore::new()));
        session.input = "hello".to_string();
        session.source = "EN".to_string();
        session.target = " Fr ".to_string();

        let record = session.translate().await.unwrap();

        let calls = provider.calls();
        assert_eq!((calls[0].source.as_str(), calls[0].target.as_str()), ("en", "fr"));
        assert_eq!(record.source_language, Language::new("en", "English"));
        assert_eq!(record.target_language, Language::new("fr", "French"));
        assert_eq!((session.source.as_str(), session.target.as_str()), ("en", "fr"));
    }

    #[tokio::test]
    async fn test_swap_languages() {
        let mut session = session(FakeProvider::ok("bonjour"), Arc::new(InMemoryStore::new()));
        session.input = "hello".to_string();
        session.translate().await.unwrap();

        // No-op while detecting the source language
        session.swap_languages();
        assert_eq!((session.source.as_str(), session.target.as_str()), ("auto", "hi"));
        assert_eq!(session.input, "hello");

        session.source = "en".to_string();
        session.target = "fr".to_string();
        session.swap_languages();
        assert_eq!((session.source.as_str(), session.target.as_str()), ("fr", "en"));
        assert_eq!(session.input, "bonjour");
        assert_eq!(session.translated(), "");
    }

    #[tokio::test]
    async fn test_clear_history() {
        let storage = Arc::new(InMemoryStore::new());
        let mut session = session(FakeProvider::ok("x"), storage.clone());
        session.input = "hello".to_string();
        session.translate().await.unwrap();

        session.clear_history();
        assert!(session.history().is_empty());
        assert_eq!(storage.get(HISTORY_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_detect_language_is_stubbed() {
        let mut session = session(FakeProvider::ok("x"), Arc::new(InMemoryStore::new()));
        session.input = "bonjour".to_string();
        assert_eq!(session.detect_language().await.unwrap(), "en");
    }

    #[tokio::test]
    async fn test_end_to_end_with_http_client() {
        use crate::core::translator::client::tests::{local_client, serve_once};

        let body = r#"{"responseData":{"translatedText":"नमस्ते"}}"#;
        let (url, server) = serve_once("200 OK", body).await;
        let storage = Arc::new(InMemoryStore::new());
        let history = HistoryStore::load(storage.clone());
        let mut session = TranslatorSession::new(Arc::new(local_client(url)), history, &UserPreferences::default());
        session.input = "hello".to_string();

        let record = session.translate().await.unwrap();
        server.await.unwrap();

        assert_eq!(session.translated(), "नमस्ते");
        assert_eq!(session.history().len(), 1);
        assert_eq!(record.translated_text, "नमस्ते");

        let reloaded = HistoryStore::load(storage);
        assert_eq!(reloaded.list(), session.history());
    }
}
