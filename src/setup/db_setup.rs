use crate::models::db_operations::library_db_operations::{MESSAGES, SEQUENCES};
use crate::models::CampaignSettings;
use redb::{CommitError, Database, StorageError, TableError, TransactionError};
use rusqlite::{Connection, Result as RusqliteResult, Transaction};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    #[error("Redb storage error: {0}")]
    RedbStorage(#[from] StorageError),
    #[error("Redb transaction error: {0}")]
    RedbTransaction(#[from] TransactionError),
    #[error("Redb table error: {0}")]
    RedbTable(#[from] TableError),
    #[error("Redb commit error: {0}")]
    RedbCommit(#[from] CommitError),
}

pub fn setup_campaign_db(conn: &mut Connection) -> Result<(), SetupError> {
    let tx = conn.transaction()?;
    log::debug!("Creating 'candidate_profiles' table");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS candidate_profiles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            personal_background TEXT NOT NULL DEFAULT '',
            political_history TEXT NOT NULL DEFAULT '',
            achievements TEXT NOT NULL DEFAULT '',
            vision TEXT NOT NULL DEFAULT '',
            social_work TEXT NOT NULL DEFAULT '',
            core_positioning TEXT NOT NULL DEFAULT '',
            party_manifesto TEXT NOT NULL DEFAULT '',
            brand_kit TEXT NOT NULL
        )",
        [],
    )?;

    log::debug!("Creating 'post_ideas' table");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS post_ideas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            brief TEXT NOT NULL,
            content_type TEXT NOT NULL CHECK(content_type IN ('Image', 'Video', 'Text', 'Audio')),
            theme_tags TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL CHECK(status IN ('Idea', 'Draft', 'Ready', 'Published')),
            post_date TEXT NOT NULL
        )",
        [],
    )?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_post_ideas_post_date ON post_ideas (post_date)", [])?;

    log::debug!("Creating 'events_calendar' table");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS events_calendar (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_name TEXT NOT NULL,
            event_date TEXT NOT NULL,
            location TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT ''
        )",
        [],
    )?;
    tx.execute("CREATE INDEX IF NOT EXISTS idx_events_calendar_date ON events_calendar (event_date)", [])?;

    log::debug!("Creating 'settings' table");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    seed_initial_settings(&tx)?;

    tx.commit()?;
    Ok(())
}

fn seed_initial_settings(tx: &Transaction) -> RusqliteResult<()> {
    let defaults = CampaignSettings::default();
    for (key, value) in [
        ("campaign_name", defaults.campaign_name),
        ("contact_phone", defaults.contact_phone),
        ("contact_email", defaults.contact_email),
        ("website", defaults.website),
    ] {
        tx.execute(
            "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
            [key, value.as_str()],
        )?;
        log::debug!("Default setting '{}' = '{}'", key, value);
    }
    Ok(())
}

pub fn setup_library_db(db: &Database) -> Result<(), SetupError> {
    let write_txn = db.begin_write()?;
    {
        log::debug!("Creating 'library_messages' table in Redb");
        write_txn.open_table(MESSAGES)?;

        log::debug!("Creating 'sequences' table in Redb");
        write_txn.open_table(SEQUENCES)?;
    }
    write_txn.commit()?;
    Ok(())
}
