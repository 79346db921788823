//! Translator feature
//!
//! MyMemory client, language catalog and the session tying them to history.

pub mod client;
pub mod languages;
pub mod session;

pub use client::{MyMemoryClient, TranslationProvider};
pub use languages::{get_language_by_code, normalize_code, resolve_language, target_languages, AUTO};
pub use session::TranslatorSession;
