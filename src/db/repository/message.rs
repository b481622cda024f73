use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::*;

/// Fixed-width RFC 3339 so lexical order in SQLite equals time order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn insert_message(conn: &Connection, msg: &Message) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO messages (sender, lang_code, message, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            msg.sender.as_str(),
            msg.lang_code,
            msg.text,
            format_timestamp(&msg.timestamp),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Latest `limit` messages, returned oldest first.
pub fn get_recent_messages(conn: &Connection, limit: usize) -> Result<Vec<Message>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT sender, lang_code, message, timestamp FROM (
             SELECT id, sender, lang_code, message, timestamp
             FROM messages ORDER BY id DESC LIMIT ?1
         ) ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(MessageRow {
            sender: row.get(0)?,
            lang_code: row.get(1)?,
            message: row.get(2)?,
            timestamp: row.get(3)?,
        })
    })?;

    let mut messages = Vec::new();
    for row in rows {
        messages.push(message_from_row(row?)?);
    }
    Ok(messages)
}

pub fn count_messages(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
    Ok(count)
}

struct MessageRow {
    sender: String,
    lang_code: String,
    message: String,
    timestamp: String,
}

fn message_from_row(row: MessageRow) -> Result<Message, DatabaseError> {
    Ok(Message {
        sender: Sender::from_str(&row.sender)?,
        lang_code: row.lang_code,
        text: row.message,
        timestamp: DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| DatabaseError::InvalidTimestamp {
                value: row.timestamp.clone(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc),
    })
}
