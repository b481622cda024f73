use std::sync::Arc;

use super::document::{TextExtractor, UploadedDocument};
use super::language_detect::{detect_language, LanguageDetector};
use super::reply::{compose_document_explanation, compose_reply, unreadable_document_reply};
use super::store::ConversationStore;
use super::symptoms::analyze_symptoms;
use super::translate::{translate_or_passthrough, Translator};
use crate::catalog::WORKING_LANGUAGE;
use crate::models::Message;

/// End-to-end message handling for the helpdesk.
///
/// Chat flow: log inbound → detect → translate to English → analyze →
/// compose → translate to user language → log outbound.
///
/// Holds no per-request state. Collaborators are injected so tests can swap
/// them for doubles.
#[derive(Clone)]
pub struct HelpdeskPipeline {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn ConversationStore>,
}

impl HelpdeskPipeline {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn ConversationStore>,
    ) -> Self {
        Self {
            detector,
            translator,
            extractor,
            store,
        }
    }

    /// Answer a typed message. Always returns a reply.
    pub fn handle_message(&self, text: &str, lang_code: &str) -> String {
        self.log(Message::from_user(lang_code, text));

        let detected = detect_language(self.detector.as_ref(), text);
        let english = translate_or_passthrough(
            self.translator.as_ref(),
            text,
            &detected,
            WORKING_LANGUAGE,
        );

        let analysis = analyze_symptoms(&english);
        tracing::info!(
            detected = %detected,
            user_lang = lang_code,
            severity = %analysis.severity,
            symptoms = %analysis.symptom_list(),
            "Message analyzed"
        );

        let reply = compose_reply(text, &english, &analysis);
        self.deliver(reply, lang_code)
    }

    /// Answer an uploaded document. Always returns a reply.
    pub fn handle_document(&self, document: &UploadedDocument, lang_code: &str) -> String {
        self.log(Message::from_user(
            lang_code,
            &format!("Uploaded file: {}", document.filename),
        ));

        let reply = match self.extractor.extract(document) {
            Ok(text) => compose_document_explanation(&text),
            Err(e) => {
                tracing::warn!(error = %e, filename = %document.filename, "Document extraction failed");
                unreadable_document_reply(&document.filename)
            }
        };
        self.deliver(reply, lang_code)
    }

    /// Translate the English reply for the user and log it.
    fn deliver(&self, reply: String, lang_code: &str) -> String {
        let localized =
            translate_or_passthrough(self.translator.as_ref(), &reply, WORKING_LANGUAGE, lang_code);
        self.log(Message::from_bot(lang_code, &localized));
        localized
    }

    /// Best-effort append. A failed write never blocks the reply.
    fn log(&self, message: Message) {
        if let Err(e) = self.store.append(&message) {
            tracing::error!(
                error = %e,
                sender = %message.sender,
                lang = %message.lang_code,
                "Failed to persist conversation message"
            );
        }
    }
}
