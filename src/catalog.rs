//! Fixed reference data shared by the pipeline and the HTTP layer:
//! supported languages, the helpline, and the compliance disclaimer.

use serde::Serialize;

/// Working language for keyword matching.
pub const WORKING_LANGUAGE: &str = "en";

/// Appended as the last line of every bot reply, before outbound translation.
pub const DISCLAIMER: &str = "⚠ Please consult a doctor before following this advice.";

/// Default health helpline surfaced verbatim in several templates.
pub const HELPLINE: &str = "104 (Govt. Health Helpline - India)";

/// Supported language codes with their display names, in menu order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("hi", "हिंदी (Hindi)"),
    ("en", "English"),
    ("te", "తెలుగు (Telugu)"),
    ("or", "ଓଡିଆ (Odia)"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// Display name for a language code. Unknown codes show as English.
pub fn display_name(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

pub fn entries() -> Vec<LanguageEntry> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageEntry { code, name })
        .collect()
}
