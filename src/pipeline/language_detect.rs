//! Statistical language detection for inbound messages.
//!
//! Detection is best-effort: the pipeline only needs to know whether a
//! message must be translated into the working language before keyword
//! matching. Low-confidence guesses are only trusted for non-Latin scripts.
//! Every failure collapses to English via [`detect_language`].

use thiserror::Error;
use whatlang::{Lang, Script};

use crate::catalog::WORKING_LANGUAGE;

#[derive(Error, Debug, PartialEq)]
pub enum DetectionError {
    #[error("No text to detect")]
    EmptyInput,

    #[error("Language could not be determined")]
    Undetectable,

    #[error("Low-confidence detection ({code}, confidence {confidence:.2})")]
    Unreliable { code: String, confidence: f64 },
}

/// Language detector abstraction (allows mocking for tests)
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Trigram/script detector backed by `whatlang`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::EmptyInput);
        }

        let info = whatlang::detect(text).ok_or(DetectionError::Undetectable)?;
        let code = iso_code(info.lang());

        // A non-Latin script rules out English even when the guess is unreliable.
        if !info.is_reliable() && info.script() == Script::Latin {
            return Err(DetectionError::Unreliable {
                code,
                confidence: info.confidence(),
            });
        }
        Ok(code)
    }
}

/// Detect the language of `text`, falling back to the working language.
pub fn detect_language(detector: &dyn LanguageDetector, text: &str) -> String {
    match detector.detect(text) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "Language detection fell back to default");
            WORKING_LANGUAGE.to_string()
        }
    }
}

/// ISO 639-1 for the languages the helpdesk cares about; ISO 639-3 otherwise.
fn iso_code(lang: Lang) -> String {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Hin => "hi",
        Lang::Tel => "te",
        Lang::Ori => "or",
        Lang::Ben => "bn",
        Lang::Mar => "mr",
        Lang::Tam => "ta",
        Lang::Kan => "kn",
        Lang::Mal => "ml",
        Lang::Guj => "gu",
        Lang::Pan => "pa",
        Lang::Urd => "ur",
        Lang::Nep => "ne",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Ara => "ar",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        other => other.code(),
    };
    code.to_string()
}
