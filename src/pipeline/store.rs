//! Append-only conversation log.
//!
//! Each append is atomic per record: the connection sits behind a mutex, so
//! concurrent requests never interleave inside a row. The persisted
//! timestamp is strictly increasing in insertion order.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, DatabaseError};
use crate::models::Message;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Conversation log lock poisoned")]
    LockPoisoned,
}

/// Conversation log abstraction (allows mocking for tests)
pub trait ConversationStore: Send + Sync {
    fn append(&self, message: &Message) -> Result<(), StorageError>;
}

struct StoreInner {
    conn: Connection,
    last_timestamp: Option<DateTime<Utc>>,
}

impl StoreInner {
    /// Microsecond timestamp no earlier than `requested` and strictly after
    /// the previous append.
    fn next_timestamp(&mut self, requested: DateTime<Utc>) -> DateTime<Utc> {
        let requested = requested.trunc_subsecs(6);
        let stamp = match self.last_timestamp {
            Some(last) if requested <= last => last + Duration::microseconds(1),
            _ => requested,
        };
        self.last_timestamp = Some(stamp);
        stamp
    }
}

/// SQLite-backed conversation log.
pub struct SqliteConversationStore {
    inner: Mutex<StoreInner>,
}

impl SqliteConversationStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Ok(Self::from_connection(db::open_database(path)?))
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self::from_connection(db::open_memory_database()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                conn,
                last_timestamp: None,
            }),
        }
    }

    /// Most recent `limit` messages, oldest first. Diagnostics only.
    pub fn recent(&self, limit: usize) -> Result<Vec<Message>, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(db::get_recent_messages(&inner.conn, limit)?)
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(db::count_messages(&inner.conn)?)
    }
}

impl ConversationStore for SqliteConversationStore {
    fn append(&self, message: &Message) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        let stamped = Message {
            timestamp: inner.next_timestamp(message.timestamp),
            ..message.clone()
        };
        let id = db::insert_message(&inner.conn, &stamped)?;
        tracing::debug!(id, sender = %stamped.sender, lang = %stamped.lang_code, "Message logged");
        Ok(())
    }
}
