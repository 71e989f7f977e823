//! Language detection — classifies text into one of the supported languages.
//!
//! Anything the classifier reports outside the supported set (or any failure to
//! classify at all) collapses to `Language::English`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use whatlang::Lang;

/// Supported pipeline languages. English is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const SUPPORTED: [Language; 2] = [Language::English, Language::German];

    /// ISO 639-1 code used on the wire and in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Accepts ISO 639-1 (`en`) and ISO 639-3 (`eng`) codes, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" => Some(Language::English),
            "de" | "deu" | "ger" => Some(Language::German),
            _ => None,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Language::default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unsupported language code '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DetectError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("classifier could not determine a language")]
    Undetermined,

    #[error("classifier returned unsupported language '{0}'")]
    Unsupported(String),
}

/// Statistical (trigram) language identifier.
#[derive(Debug, Clone, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detects the language, coercing every failure to the default language.
    pub fn detect(&self, text: &str) -> Language {
        match self.try_detect(text) {
            Ok(lang) => lang,
            Err(e) => {
                debug!("Language detection fell back to default: {e}");
                Language::default()
            }
        }
    }

    /// Tagged variant of [`detect`](Self::detect) that reports why the default was used.
    pub fn try_detect(&self, text: &str) -> Result<Language, DetectError> {
        if text.trim().is_empty() {
            return Err(DetectError::EmptyInput);
        }

        let info = whatlang::detect(text).ok_or(DetectError::Undetermined)?;

        match info.lang() {
            Lang::Eng => Ok(Language::English),
            Lang::Deu => Ok(Language::German),
            other => Err(DetectError::Unsupported(other.code().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_TEXT: &str = "Experienced software engineer with a strong background in \
        building distributed systems. I have worked with Python and Docker for several years \
        and enjoy mentoring junior developers on the team.";

    const GERMAN_TEXT: &str = "Erfahrener Softwareentwickler mit Kenntnissen in der \
        Entwicklung von Webanwendungen. Ich arbeite gerne im Team und habe mehrere Jahre \
        Erfahrung mit der Betreuung von Kunden und der Leitung von Projekten.";

    const FRENCH_TEXT: &str = "Ingénieur logiciel expérimenté avec une solide expérience \
        dans le développement des applications web. J'aime travailler en équipe et je suis \
        toujours prêt à apprendre de nouvelles choses chaque jour.";

    #[test]
    fn test_detects_english() {
        assert_eq!(LanguageDetector::new().detect(ENGLISH_TEXT), Language::English);
    }

    #[test]
    fn test_detects_german() {
        assert_eq!(LanguageDetector::new().detect(GERMAN_TEXT), Language::German);
    }

    #[test]
    fn test_unsupported_language_falls_back_to_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(FRENCH_TEXT), Language::English);
        assert!(matches!(
            detector.try_detect(FRENCH_TEXT),
            Err(DetectError::Unsupported(code)) if code == "fra"
        ));
    }

    #[test]
    fn test_empty_text_returns_default() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(""), Language::English);
        assert_eq!(detector.detect("   \n\t "), Language::English);
        assert_eq!(detector.try_detect("  "), Err(DetectError::EmptyInput));
    }

    #[test]
    fn test_symbol_only_text_does_not_panic() {
        assert_eq!(LanguageDetector::new().detect("1234 !!! ???"), Language::English);
    }

    #[test]
    fn test_language_codes_round_trip_through_from_str() {
        for lang in Language::SUPPORTED {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("DEU".parse::<Language>().unwrap(), Language::German);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&Language::German).unwrap(), r#""de""#);
        let lang: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(lang, Language::English);
    }
}
