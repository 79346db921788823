use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{TranslateRequest, TranslateResponse};

/// A remote service able to translate text
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// One request/response exchange, no retry
    async fn translate(&self, request: &TranslateRequest) -> AppResult<TranslateResponse>;

    /// Language detection is not supported; every text is reported as English
    async fn detect_language(&self, _text: &str) -> AppResult<String> {
        Ok("en".to_string())
    }
}

// -- MyMemory response, only the part we read --

#[derive(Debug, Default, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData", default)]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

/// Client for the MyMemory translation API
pub struct MyMemoryClient {
    http: Client,
    base_url: String,
}

impl MyMemoryClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("quick-translate/translator")
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self::with_http(http, base_url))
    }

    /// Use a preconfigured HTTP client
    pub fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn request_url(&self, request: &TranslateRequest) -> String {
        format!(
            "{}?q={}&langpair={}|{}",
            self.base_url,
            urlencoding::encode(&request.text),
            request.source,
            request.target
        )
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<TranslateResponse> {
        let url = self.request_url(request);
        tracing::debug!(source = %request.source, target = %request.target, "requesting translation");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "translation request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "translation API returned error");
            return Err(AppError::Network(format!(
                "Translation failed: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            )));
        }

        let body = response.json::<MyMemoryResponse>().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to parse translation response");
            AppError::from(e)
        })?;

        let translated_text = body
            .response_data
            .and_then(|data| data.translated_text)
            .unwrap_or_default();

        Ok(TranslateResponse { translated_text })
    }
}
