use crate::models::db_operations::{
    library_db_operations, planner_db_operations, profiles_db_operations, DbError,
};
use crate::models::{NewCandidateProfile, NewEventCalendarEntry, NewLibraryMessage, NewPostIdea};
use redb::Database;
use rusqlite::Connection;
use serde::Serialize;

const CANDIDATE_PROFILES: &str = include_str!("../../fixtures/candidate_profiles.json");
const POST_IDEAS: &str = include_str!("../../fixtures/post_ideas.json");
const EVENTS_CALENDAR: &str = include_str!("../../fixtures/events_calendar.json");
const MESSAGE_LIBRARY: &str = include_str!("../../fixtures/message_library.json");

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct SeedReport {
    pub profiles: usize,
    pub post_ideas: usize,
    pub events: usize,
    pub messages: usize,
}

/// Loads the bundled fixtures into every table that is still empty.
/// Tables that already hold records are left alone.
pub fn seed_empty_tables(conn: &mut Connection, library: &Database) -> Result<SeedReport, DbError> {
    let mut report = SeedReport::default();

    if profiles_db_operations::read_all_profiles(conn)?.is_empty() {
        let profiles: Vec<NewCandidateProfile> = serde_json::from_str(CANDIDATE_PROFILES)?;
        report.profiles = profiles_db_operations::create_profiles(conn, &profiles)?.len();
    }

    if planner_db_operations::read_all_post_ideas(conn)?.is_empty() {
        let ideas: Vec<NewPostIdea> = serde_json::from_str(POST_IDEAS)?;
        report.post_ideas = planner_db_operations::create_post_ideas(conn, &ideas)?.len();
    }

    if planner_db_operations::read_all_events(conn)?.is_empty() {
        let events: Vec<NewEventCalendarEntry> = serde_json::from_str(EVENTS_CALENDAR)?;
        report.events = planner_db_operations::create_events(conn, &events)?.len();
    }

    if library_db_operations::count_messages(library)? == 0 {
        let messages: Vec<NewLibraryMessage> = serde_json::from_str(MESSAGE_LIBRARY)?;
        report.messages = messages.len();
        for message in messages {
            library_db_operations::create_message(library, message)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::db_setup;

    #[test]
    fn seeding_fills_empty_tables_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_campaign_db(&mut conn).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let library = Database::create(dir.path().join("library.db")).unwrap();
        db_setup::setup_library_db(&library).unwrap();

        let first = seed_empty_tables(&mut conn, &library).unwrap();
        assert_eq!(first, SeedReport { profiles: 1, post_ideas: 4, events: 3, messages: 2 });

        let second = seed_empty_tables(&mut conn, &library).unwrap();
        assert_eq!(second, SeedReport::default());

        let profile = profiles_db_operations::read_current_profile(&conn).unwrap().unwrap();
        assert_eq!(profile.brand_kit.slogan, "Progress That Matters");
    }

    #[test]
    fn failed_event_seed_leaves_the_calendar_empty() {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_campaign_db(&mut conn).unwrap();
        conn.execute_batch(
            "CREATE TRIGGER third_event_fails BEFORE INSERT ON events_calendar
             WHEN (SELECT COUNT(*) FROM events_calendar) >= 2
             BEGIN SELECT RAISE(ABORT, 'calendar full'); END;",
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let library = Database::create(dir.path().join("library.db")).unwrap();
        db_setup::setup_library_db(&library).unwrap();

        assert!(seed_empty_tables(&mut conn, &library).is_err());
        assert!(planner_db_operations::read_all_events(&conn).unwrap().is_empty());
        assert_eq!(profiles_db_operations::read_all_profiles(&conn).unwrap().len(), 1);

        conn.execute_batch("DROP TRIGGER third_event_fails;").unwrap();
        let retry = seed_empty_tables(&mut conn, &library).unwrap();
        assert_eq!(retry, SeedReport { profiles: 0, post_ideas: 0, events: 3, messages: 2 });
    }
}
