use serde::{Deserialize, Serialize};

use super::enums::{Severity, SymptomTag};

/// Keyword triage of a single message. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tags in detection order; each tag appears at most once.
    pub symptoms: Vec<SymptomTag>,
    pub severity: Severity,
    pub notes: String,
}

impl AnalysisResult {
    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.is_empty()
    }

    /// Comma-separated tag names, e.g. `fever, pain`.
    pub fn symptom_list(&self) -> String {
        self.symptoms
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
