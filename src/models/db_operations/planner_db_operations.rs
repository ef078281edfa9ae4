use crate::models::{
    ContentType, EventCalendarEntry, EventCalendarEntryPatch, NewEventCalendarEntry, NewPostIdea, PostIdea,
    PostIdeaFilter, PostIdeaPatch, PostStatus,
};
use chrono::{Duration, NaiveDate};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::DbError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_date(column: &'static str, value: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| DbError::Corrupt { column, reason: e.to_string() })
}

// ====================================================================
// ========================== POST IDEAS ==============================
// ====================================================================

struct RawPostIdea {
    id: i64,
    brief: String,
    content_type: String,
    theme_tags: String,
    status: String,
    post_date: String,
}

const IDEA_COLUMNS: &str = "id, brief, content_type, theme_tags, status, post_date";

fn row_to_raw_idea(row: &Row) -> rusqlite::Result<RawPostIdea> {
    Ok(RawPostIdea {
        id: row.get(0)?,
        brief: row.get(1)?,
        content_type: row.get(2)?,
        theme_tags: row.get(3)?,
        status: row.get(4)?,
        post_date: row.get(5)?,
    })
}

impl TryFrom<RawPostIdea> for PostIdea {
    type Error = DbError;

    fn try_from(raw: RawPostIdea) -> Result<Self, Self::Error> {
        Ok(PostIdea {
            id: raw.id,
            brief: raw.brief,
            content_type: raw.content_type.parse::<ContentType>()
                .map_err(|e| DbError::Corrupt { column: "content_type", reason: e.to_string() })?,
            theme_tags: split_tags(&raw.theme_tags),
            status: raw.status.parse::<PostStatus>()
                .map_err(|e| DbError::Corrupt { column: "status", reason: e.to_string() })?,
            post_date: parse_date("post_date", &raw.post_date)?,
        })
    }
}

pub fn create_post_idea(conn: &Connection, idea: &NewPostIdea) -> Result<PostIdea, DbError> {
    conn.execute(
        "INSERT INTO post_ideas (brief, content_type, theme_tags, status, post_date) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            idea.brief,
            idea.content_type.as_str(),
            join_tags(&idea.theme_tags),
            idea.status.as_str(),
            idea.post_date.format(DATE_FORMAT).to_string()
        ],
    )?;
    let id = conn.last_insert_rowid();
    read_post_idea(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Post idea with id {}", id)))
}

/// Inserts a batch of ideas in one transaction and returns them with their new ids.
pub fn create_post_ideas(conn: &mut Connection, ideas: &[NewPostIdea]) -> Result<Vec<PostIdea>, DbError> {
    let tx = conn.transaction()?;
    let mut created = Vec::with_capacity(ideas.len());
    for idea in ideas {
        created.push(create_post_idea(&tx, idea)?);
    }
    tx.commit()?;
    Ok(created)
}

pub fn read_post_idea(conn: &Connection, id: i64) -> Result<Option<PostIdea>, DbError> {
    let raw = conn
        .query_row(
            &format!("SELECT {} FROM post_ideas WHERE id = ?1", IDEA_COLUMNS),
            [id],
            row_to_raw_idea,
        )
        .optional()?;
    raw.map(PostIdea::try_from).transpose()
}

pub fn read_all_post_ideas(conn: &Connection) -> Result<Vec<PostIdea>, DbError> {
    read_filtered_post_ideas(conn, &PostIdeaFilter::default())
}

/// Equality filters on status/content type and an inclusive post date range.
pub fn read_filtered_post_ideas(conn: &Connection, filter: &PostIdeaFilter) -> Result<Vec<PostIdea>, DbError> {
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(status) = filter.status {
        values.push(status.as_str().to_string());
        clauses.push(format!("status = ?{}", values.len()));
    }
    if let Some(content_type) = filter.content_type {
        values.push(content_type.as_str().to_string());
        clauses.push(format!("content_type = ?{}", values.len()));
    }
    if let Some(from) = filter.from {
        values.push(from.format(DATE_FORMAT).to_string());
        clauses.push(format!("post_date >= ?{}", values.len()));
    }
    if let Some(to) = filter.to {
        values.push(to.format(DATE_FORMAT).to_string());
        clauses.push(format!("post_date <= ?{}", values.len()));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    let query = format!("SELECT {} FROM post_ideas{} ORDER BY id", IDEA_COLUMNS, where_clause);

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), row_to_raw_idea)?;
    rows.map(|r| PostIdea::try_from(r?)).collect()
}

/// Ideas with `first <= post_date <= last`.
pub fn read_post_ideas_between(conn: &Connection, first: NaiveDate, last: NaiveDate) -> Result<Vec<PostIdea>, DbError> {
    let filter = PostIdeaFilter { from: Some(first), to: Some(last), ..Default::default() };
    read_filtered_post_ideas(conn, &filter)
}

pub fn update_post_idea(conn: &Connection, id: i64, patch: PostIdeaPatch) -> Result<PostIdea, DbError> {
    let mut idea = read_post_idea(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Post idea with id {}", id)))?;
    idea.apply(patch);
    conn.execute(
        "UPDATE post_ideas SET brief = ?1, content_type = ?2, theme_tags = ?3, status = ?4, post_date = ?5 WHERE id = ?6",
        params![
            idea.brief,
            idea.content_type.as_str(),
            join_tags(&idea.theme_tags),
            idea.status.as_str(),
            idea.post_date.format(DATE_FORMAT).to_string(),
            id
        ],
    )?;
    Ok(idea)
}

pub fn delete_post_idea(conn: &Connection, id: i64) -> Result<(), DbError> {
    match conn.execute("DELETE FROM post_ideas WHERE id = ?1", [id])? {
        0 => Err(DbError::NotFound(format!("Post idea with id {}", id))),
        _ => Ok(()),
    }
}

pub fn count_post_ideas_by_status(conn: &Connection, status: PostStatus) -> Result<usize, DbError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM post_ideas WHERE status = ?1",
        [status.as_str()],
        |row| row.get(0),
    )?;
    Ok(count as usize)
}

// ====================================================================
// ========================= EVENT CALENDAR ===========================
// ====================================================================

const EVENT_COLUMNS: &str = "id, event_name, event_date, location, description";

struct RawEvent {
    id: i64,
    event_name: String,
    event_date: String,
    location: String,
    description: String,
}

fn row_to_raw_event(row: &Row) -> rusqlite::Result<RawEvent> {
    Ok(RawEvent {
        id: row.get(0)?,
        event_name: row.get(1)?,
        event_date: row.get(2)?,
        location: row.get(3)?,
        description: row.get(4)?,
    })
}

impl TryFrom<RawEvent> for EventCalendarEntry {
    type Error = DbError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Ok(EventCalendarEntry {
            id: raw.id,
            event_name: raw.event_name,
            event_date: parse_date("event_date", &raw.event_date)?,
            location: raw.location,
            description: raw.description,
        })
    }
}

pub fn create_event(conn: &Connection, event: &NewEventCalendarEntry) -> Result<EventCalendarEntry, DbError> {
    conn.execute(
        "INSERT INTO events_calendar (event_name, event_date, location, description) VALUES (?1, ?2, ?3, ?4)",
        params![
            event.event_name,
            event.event_date.format(DATE_FORMAT).to_string(),
            event.location,
            event.description
        ],
    )?;
    let id = conn.last_insert_rowid();
    read_event(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Event with id {}", id)))
}

pub fn create_events(conn: &mut Connection, events: &[NewEventCalendarEntry]) -> Result<Vec<EventCalendarEntry>, DbError> {
    let tx = conn.transaction()?;
    let mut created = Vec::with_capacity(events.len());
    for event in events {
        created.push(create_event(&tx, event)?);
    }
    tx.commit()?;
    Ok(created)
}

pub fn read_event(conn: &Connection, id: i64) -> Result<Option<EventCalendarEntry>, DbError> {
    let raw = conn
        .query_row(
            &format!("SELECT {} FROM events_calendar WHERE id = ?1", EVENT_COLUMNS),
            [id],
            row_to_raw_event,
        )
        .optional()?;
    raw.map(EventCalendarEntry::try_from).transpose()
}

pub fn read_all_events(conn: &Connection) -> Result<Vec<EventCalendarEntry>, DbError> {
    let mut stmt = conn.prepare(&format!("SELECT {} FROM events_calendar ORDER BY id", EVENT_COLUMNS))?;
    let rows = stmt.query_map([], row_to_raw_event)?;
    rows.map(|r| EventCalendarEntry::try_from(r?)).collect()
}

/// Events dated from `today` through `today + days`, both ends inclusive, soonest first.
pub fn read_upcoming_events(conn: &Connection, today: NaiveDate, days: i64) -> Result<Vec<EventCalendarEntry>, DbError> {
    let until = today + Duration::days(days.max(0));
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM events_calendar WHERE event_date >= ?1 AND event_date <= ?2 ORDER BY event_date, id",
        EVENT_COLUMNS
    ))?;
    let rows = stmt.query_map(
        params![today.format(DATE_FORMAT).to_string(), until.format(DATE_FORMAT).to_string()],
        row_to_raw_event,
    )?;
    rows.map(|r| EventCalendarEntry::try_from(r?)).collect()
}

pub fn update_event(conn: &Connection, id: i64, patch: EventCalendarEntryPatch) -> Result<EventCalendarEntry, DbError> {
    let mut event = read_event(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Event with id {}", id)))?;
    event.apply(patch);
    conn.execute(
        "UPDATE events_calendar SET event_name = ?1, event_date = ?2, location = ?3, description = ?4 WHERE id = ?5",
        params![
            event.event_name,
            event.event_date.format(DATE_FORMAT).to_string(),
            event.location,
            event.description,
            id
        ],
    )?;
    Ok(event)
}

pub fn delete_event(conn: &Connection, id: i64) -> Result<(), DbError> {
    match conn.execute("DELETE FROM events_calendar WHERE id = ?1", [id])? {
        0 => Err(DbError::NotFound(format!("Event with id {}", id))),
        _ => Ok(()),
    }
}
