pub mod document;
pub mod language_detect;
pub mod orchestrator;
pub mod reply;
pub mod store;
pub mod symptoms;
pub mod translate;

pub use document::{SimulatedOcr, TextExtractor, UploadedDocument};
pub use language_detect::{LanguageDetector, WhatlangDetector};
pub use orchestrator::HelpdeskPipeline;
pub use store::{ConversationStore, SqliteConversationStore, StorageError};
pub use translate::{HttpTranslator, Translator};
