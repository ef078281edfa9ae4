use crate::helper::message_templates::validate_library_text;
use crate::helper::HelperError;
use crate::models::db_operations::library_db_operations;
use crate::models::{LibraryMessage, LibraryMessagePatch, NewLibraryMessage};
use redb::Database;

pub fn list_messages(db: &Database) -> Result<Vec<LibraryMessage>, HelperError> {
    Ok(library_db_operations::read_all_messages(db)?)
}

pub fn get_message(db: &Database, id: u64) -> Result<LibraryMessage, HelperError> {
    library_db_operations::read_message(db, id)?
        .ok_or_else(|| HelperError::NotFound(format!("Message with id {}", id)))
}

pub fn save_message(db: &Database, message: NewLibraryMessage) -> Result<LibraryMessage, HelperError> {
    validate_library_text(&message.message_text)?;
    let saved = library_db_operations::create_message(db, message)?;
    log::info!("Saved message {} to the library", saved.id);
    Ok(saved)
}

pub fn update_message(db: &Database, id: u64, patch: LibraryMessagePatch) -> Result<LibraryMessage, HelperError> {
    if let Some(text) = &patch.message_text {
        validate_library_text(text)?;
    }
    Ok(library_db_operations::update_message(db, id, patch)?)
}

pub fn delete_message(db: &Database, id: u64) -> Result<(), HelperError> {
    library_db_operations::delete_message(db, id)?;
    log::info!("Deleted library message {}", id);
    Ok(())
}
