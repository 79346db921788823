//! Supported languages

use isolang::Language as IsoLanguage;

use crate::shared::types::Language;

/// Pseudo language code asking the service to detect the source language
pub const AUTO: &str = "auto";

/// Catalog of selectable languages, `auto` first
pub const LANGUAGES: &[(&str, &str)] = &[
    (AUTO, "Detect Language"),
    ("en", "English"),
    ("zh", "Chinese"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ar", "Arabic"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
    ("hy", "Armenian"),
    ("fa", "Persian"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ko", "Korean"),
    ("bn", "Bengali"),
    ("ur", "Urdu"),
    ("th", "Thai"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("hu", "Hungarian"),
];

pub fn all_languages() -> Vec<Language> {
    LANGUAGES.iter().map(|(code, name)| Language::new(*code, *name)).collect()
}

/// Languages that can be translated into (everything but `auto`)
pub fn target_languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .filter(|(code, _)| *code != AUTO)
        .map(|(code, name)| Language::new(*code, *name))
        .collect()
}

pub fn get_language_by_code(code: &str) -> Option<Language> {
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, name)| Language::new(*c, *name))
}

/// Canonical spelling of a code: the catalog's code when listed,
/// otherwise the trimmed input
pub fn normalize_code(code: &str) -> String {
    let trimmed = code.trim();
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(trimmed))
        .map(|(c, _)| c.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Resolve a code for display in history.
///
/// Catalog entries win; other ISO 639-1/639-3 codes get their English name;
/// anything else is kept with the name `"Unknown"`.
pub fn resolve_language(code: &str) -> Language {
    if let Some(lang) = get_language_by_code(code) {
        return lang;
    }

    let lower = code.to_ascii_lowercase();
    IsoLanguage::from_639_1(&lower)
        .or_else(|| IsoLanguage::from_639_3(&lower))
        .map(|iso| Language::new(code, iso.to_name()))
        .unwrap_or_else(|| Language::new(code, "Unknown"))
}
