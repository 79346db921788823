use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A language as shown to the user: ISO code plus display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "translation.ts")]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "translation.ts")]
pub struct TranslateRequest {
    pub text: String,
    /// Language code or `"auto"`
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "translation.ts")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// A successful translation before it enters the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "translation.ts")]
pub struct NewTranslation {
    pub source_text: String,
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: Language,
}

/// One entry of the translation history.
///
/// Records are immutable once created. The serialized form (camelCase,
/// RFC 3339 timestamp) is both the persisted format and the shape the
/// web UI consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "translation.ts")]
pub struct TranslationRecord {
    pub id: String,
    pub source_text: String,
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: Language,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    /// Stamp a new translation with a fresh id and the given creation instant
    pub fn from_new(translation: NewTranslation, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_text: translation.source_text,
            translated_text: translation.translated_text,
            source_language: translation.source_language,
            target_language: translation.target_language,
            timestamp,
        }
    }
}
