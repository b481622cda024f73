//! Canned reply selection.
//!
//! Rules are evaluated top to bottom against the English working text, with a
//! few native-script checks against the original message. The first rule
//! that matches renders the reply; later rules are not consulted. The
//! disclaimer is appended to every reply, whichever rule produced it.

use crate::catalog::{DISCLAIMER, HELPLINE};
use crate::models::{AnalysisResult, Severity};

pub const HOSPITAL_SEARCH_URL: &str = "https://www.google.com/maps/search/hospital+near+me";
pub const WHO_URL: &str = "https://www.who.int";

/// Everything a rule may inspect.
pub struct ReplyInput<'a> {
    pub original: &'a str,
    /// Lowercased English working text.
    pub english_lower: &'a str,
    /// English working text as received, used for echoing.
    pub english: &'a str,
    pub analysis: &'a AnalysisResult,
}

/// One (predicate, template) pair in the priority chain.
pub struct ReplyRule {
    pub name: &'static str,
    pub matches: fn(&ReplyInput) -> bool,
    pub render: fn(&ReplyInput) -> Vec<String>,
}

/// Ordered rule table. The last rule always matches.
pub static REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        name: "pain",
        matches: |i| i.english_lower.contains("pain") || i.original.contains("दर्द"),
        render: |_| {
            vec![
                format!("I detected pain. Please call {HELPLINE}."),
                format!(
                    "If the pain is intense or sudden, visit the nearest hospital 👉 {HOSPITAL_SEARCH_URL}"
                ),
            ]
        },
    },
    ReplyRule {
        name: "fever",
        matches: |i| i.english_lower.contains("fever") || i.original.contains("बुखार"),
        render: |_| vec!["For fever: Drink fluids, rest, monitor temperature.".to_string()],
    },
    ReplyRule {
        name: "misinformation",
        matches: |i| i.english_lower.contains("garlic"),
        render: |_| {
            vec![
                "⚠ Garlic does NOT cure TB. Refer to official guidance (WHO) for treatment."
                    .to_string(),
                WHO_URL.to_string(),
            ]
        },
    },
    ReplyRule {
        name: "emergency",
        matches: |i| i.english_lower.contains("sos") || i.original.contains("😭"),
        render: |_| {
            vec![format!(
                "🚨 Emergency detected! Call {HELPLINE} or nearest hospital immediately."
            )]
        },
    },
    ReplyRule {
        name: "symptoms",
        matches: |i| i.analysis.has_symptoms(),
        render: |i| {
            let advice = if i.analysis.severity == Severity::Severe {
                format!("Severity appears high — seek emergency care now: {HOSPITAL_SEARCH_URL}")
            } else {
                "Try home care measures (rest, fluids). Monitor and seek care if symptoms worsen."
                    .to_string()
            };
            vec![
                format!("I detected symptoms: {}.", i.analysis.symptom_list()),
                advice,
            ]
        },
    },
    ReplyRule {
        name: "echo",
        matches: |_| true,
        render: |i| {
            vec![
                format!("You said: {}", i.english),
                "Tell me more about your symptoms or type 'symptom checker' to begin.".to_string(),
            ]
        },
    },
];

/// First rule whose predicate holds for the input.
pub fn select_rule(input: &ReplyInput) -> &'static ReplyRule {
    REPLY_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .unwrap_or(&REPLY_RULES[REPLY_RULES.len() - 1])
}

/// Join reply lines and append the disclaimer as the final line.
pub fn with_disclaimer(mut lines: Vec<String>) -> String {
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

/// Compose the English reply for a chat message.
pub fn compose_reply(original: &str, english: &str, analysis: &AnalysisResult) -> String {
    let english_lower = english.to_lowercase();
    let input = ReplyInput {
        original,
        english_lower: &english_lower,
        english,
        analysis,
    };
    let rule = select_rule(&input);
    tracing::debug!(rule = rule.name, "Reply rule selected");
    with_disclaimer((rule.render)(&input))
}

/// Fixed dosage explanation for text extracted from an uploaded document.
pub fn compose_document_explanation(extracted_text: &str) -> String {
    with_disclaimer(vec![
        format!("I found this in your document: {extracted_text}"),
        "Dosage: Paracetamol 500 mg - take one tablet twice a day after food. \
         If fever persists > 48 hours, consult your doctor."
            .to_string(),
    ])
}

/// Reply when an uploaded document yields no readable text.
pub fn unreadable_document_reply(filename: &str) -> String {
    with_disclaimer(vec![
        format!("I could not read the document {filename}."),
        "Please upload a clearer photo or type the prescription details.".to_string(),
    ])
}

/// Reply for an upload request that carries no file.
pub fn missing_file_reply() -> String {
    with_disclaimer(vec!["No file received.".to_string()])
}
