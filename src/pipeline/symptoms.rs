//! Keyword triage over the English working text.
//!
//! Coarse signal only: tags come from fixed word sets, severity from the
//! first matching severity tier. Not a clinical assessment.

use crate::models::{AnalysisResult, Severity, SymptomTag};

/// Tag checks in output order. Native-script keywords sit alongside English
/// ones so untranslated text still matches.
const SYMPTOM_KEYWORDS: &[(SymptomTag, &[&str])] = &[
    (SymptomTag::Fever, &["fever", "बुखार"]),
    (SymptomTag::Pain, &["pain", "दर्द", "ache"]),
];

/// Severity tiers, most urgent first. First tier with a hit wins.
const SEVERITY_KEYWORDS: &[(Severity, &[&str])] = &[
    (
        Severity::Severe,
        &["bleeding", "unconscious", "severe", "chest pain", "difficulty breathing"],
    ),
    (Severity::Moderate, &["high", "104"]),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Analyze a message for symptom tags and severity. Total: never fails.
pub fn analyze_symptoms(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let symptoms = SYMPTOM_KEYWORDS
        .iter()
        .filter(|(_, words)| contains_any(&lower, words))
        .map(|(tag, _)| *tag)
        .collect();

    let severity = SEVERITY_KEYWORDS
        .iter()
        .find(|(_, words)| contains_any(&lower, words))
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::Mild);

    AnalysisResult {
        symptoms,
        severity,
        notes: String::new(),
    }
}
