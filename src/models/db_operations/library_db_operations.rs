use crate::models::{LibraryMessage, LibraryMessagePatch, NewLibraryMessage};
use chrono::Utc;
use redb::{Database, ReadableTable, TableDefinition};

use super::DbError;

pub const MESSAGES: TableDefinition<u64, &str> = TableDefinition::new("library_messages");
// Last id handed out per table; ids are never reused even after the newest row is deleted.
pub const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");

const MESSAGE_SEQUENCE: &str = "library_messages";

pub fn create_message(db: &Database, message: NewLibraryMessage) -> Result<LibraryMessage, DbError> {
    let write_txn = db.begin_write()?;
    let created = {
        let mut sequences = write_txn.open_table(SEQUENCES)?;
        let mut messages = write_txn.open_table(MESSAGES)?;

        let last_id = sequences.get(MESSAGE_SEQUENCE)?.map(|guard| guard.value()).unwrap_or(0);
        let id = last_id + 1;

        let created = LibraryMessage {
            id,
            message_text: message.message_text,
            occasion: message.occasion,
            language: message.language,
            tone: message.tone,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&created)?;
        messages.insert(id, json.as_str())?;
        sequences.insert(MESSAGE_SEQUENCE, id)?;
        created
    };
    write_txn.commit()?;
    Ok(created)
}

pub fn read_message(db: &Database, id: u64) -> Result<Option<LibraryMessage>, DbError> {
    let read_txn = db.begin_read()?;
    let messages = read_txn.open_table(MESSAGES)?;
    let message = match messages.get(id)? {
        Some(guard) => Some(serde_json::from_str(guard.value())?),
        None => None,
    };
    Ok(message)
}

/// All saved messages in id (creation) order.
pub fn read_all_messages(db: &Database) -> Result<Vec<LibraryMessage>, DbError> {
    let read_txn = db.begin_read()?;
    let messages = read_txn.open_table(MESSAGES)?;
    let mut all = Vec::new();
    for entry in messages.iter()? {
        let (_, value) = entry?;
        all.push(serde_json::from_str(value.value())?);
    }
    Ok(all)
}

pub fn count_messages(db: &Database) -> Result<usize, DbError> {
    let read_txn = db.begin_read()?;
    let messages = read_txn.open_table(MESSAGES)?;
    Ok(messages.len()? as usize)
}

pub fn update_message(db: &Database, id: u64, patch: LibraryMessagePatch) -> Result<LibraryMessage, DbError> {
    let write_txn = db.begin_write()?;
    let updated = {
        let mut messages = write_txn.open_table(MESSAGES)?;
        let mut existing: LibraryMessage = {
            let guard = messages.get(id)?.ok_or_else(|| DbError::NotFound(format!("Message with id {}", id)))?;
            serde_json::from_str(guard.value())?
        };
        existing.apply(patch);
        let json = serde_json::to_string(&existing)?;
        messages.insert(id, json.as_str())?;
        existing
    };
    write_txn.commit()?;
    Ok(updated)
}

pub fn delete_message(db: &Database, id: u64) -> Result<(), DbError> {
    let write_txn = db.begin_write()?;
    let removed = {
        let mut messages = write_txn.open_table(MESSAGES)?;
        let removed = messages.remove(id)?.is_some();
        removed
    };
    if !removed {
        write_txn.abort()?;
        return Err(DbError::NotFound(format!("Message with id {}", id)));
    }
    write_txn.commit()?;
    Ok(())
}
