use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Sender;

/// One entry of the conversation log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub lang_code: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, lang_code: &str, text: &str) -> Self {
        Self {
            sender,
            lang_code: lang_code.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_user(lang_code: &str, text: &str) -> Self {
        Self::new(Sender::User, lang_code, text)
    }

    pub fn from_bot(lang_code: &str, text: &str) -> Self {
        Self::new(Sender::Bot, lang_code, text)
    }
}
