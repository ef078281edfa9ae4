use crate::helper::sanitization_helpers::normalize_tags;
use crate::helper::{require, HelperError};
use crate::models::db_operations::{library_db_operations, planner_db_operations, profiles_db_operations};
use crate::models::{
    CalendarDay, ContentType, DashboardStats, DashboardSummary, EventCalendarEntry, EventCalendarEntryPatch,
    MonthCalendar, NewEventCalendarEntry, NewPostIdea, PostIdea, PostIdeaFilter, PostIdeaPatch, PostStatus,
};
use crate::DbPool;
use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use redb::Database;
use std::collections::BTreeMap;

pub const DEFAULT_UPCOMING_DAYS: i64 = 30;
const MAX_UPCOMING_DAYS: i64 = 366;
const GENERATED_IDEA_WINDOW_DAYS: i64 = 14;
const DASHBOARD_RECENT_IDEAS: usize = 4;

// (brief, content type, theme tags)
const IDEA_BRIEFS: [(&str, ContentType, &[&str]); 5] = [
    (
        "Share a powerful quote about community unity with inspiring background visuals",
        ContentType::Image,
        &["Unity", "Community", "Inspiration"],
    ),
    (
        "Create a video highlighting recent infrastructure improvements and their impact",
        ContentType::Video,
        &["Infrastructure", "Progress", "Development"],
    ),
    (
        "Post about upcoming healthcare initiatives and their benefits for families",
        ContentType::Text,
        &["Healthcare", "Family", "Community"],
    ),
    (
        "Feature local business success stories and job creation achievements",
        ContentType::Image,
        &["Economy", "Business", "Jobs"],
    ),
    (
        "Behind-the-scenes video of community engagement activities",
        ContentType::Video,
        &["Community", "Engagement", "Transparency"],
    ),
];

// ====================================================================
// =========================== POST IDEAS =============================
// ====================================================================

pub fn list_post_ideas(pool: &DbPool, filter: &PostIdeaFilter) -> Result<Vec<PostIdea>, HelperError> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(HelperError::validation("'from' must not be after 'to'"));
        }
    }
    let conn = pool.get()?;
    Ok(planner_db_operations::read_filtered_post_ideas(&conn, filter)?)
}

pub fn get_post_idea(pool: &DbPool, id: i64) -> Result<PostIdea, HelperError> {
    let conn = pool.get()?;
    planner_db_operations::read_post_idea(&conn, id)?
        .ok_or_else(|| HelperError::NotFound(format!("Post idea with id {}", id)))
}

pub fn create_post_idea(pool: &DbPool, mut idea: NewPostIdea) -> Result<PostIdea, HelperError> {
    require(&idea.brief, "Brief")?;
    idea.theme_tags = normalize_tags(&idea.theme_tags);
    let conn = pool.get()?;
    Ok(planner_db_operations::create_post_idea(&conn, &idea)?)
}

pub fn update_post_idea(pool: &DbPool, id: i64, mut patch: PostIdeaPatch) -> Result<PostIdea, HelperError> {
    if let Some(brief) = &patch.brief {
        require(brief, "Brief")?;
    }
    patch.theme_tags = patch.theme_tags.map(|tags| normalize_tags(&tags));
    let conn = pool.get()?;
    Ok(planner_db_operations::update_post_idea(&conn, id, patch)?)
}

/// Moves an idea to another day, leaving everything else untouched.
pub fn reschedule_post_idea(pool: &DbPool, id: i64, post_date: NaiveDate) -> Result<PostIdea, HelperError> {
    let patch = PostIdeaPatch { post_date: Some(post_date), ..Default::default() };
    let conn = pool.get()?;
    let idea = planner_db_operations::update_post_idea(&conn, id, patch)?;
    log::info!("Rescheduled post idea {} to {}", id, post_date);
    Ok(idea)
}

pub fn delete_post_idea(pool: &DbPool, id: i64) -> Result<(), HelperError> {
    let conn = pool.get()?;
    Ok(planner_db_operations::delete_post_idea(&conn, id)?)
}

/// The five stock ideas, each dated somewhere in the two weeks starting `today`.
pub fn draft_generated_ideas<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<NewPostIdea> {
    IDEA_BRIEFS
        .iter()
        .map(|(brief, content_type, tags)| NewPostIdea {
            brief: brief.to_string(),
            content_type: *content_type,
            theme_tags: tags.iter().map(|t| t.to_string()).collect(),
            status: PostStatus::Idea,
            post_date: today + Duration::days(rng.gen_range(0..GENERATED_IDEA_WINDOW_DAYS)),
        })
        .collect()
}

pub fn generate_post_ideas<R: Rng>(pool: &DbPool, today: NaiveDate, rng: &mut R) -> Result<Vec<PostIdea>, HelperError> {
    let ideas = draft_generated_ideas(today, rng);
    let mut conn = pool.get()?;
    let created = planner_db_operations::create_post_ideas(&mut conn, &ideas)?;
    log::info!("Generated {} post ideas", created.len());
    Ok(created)
}

fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), HelperError> {
    let invalid = || HelperError::validation(format!("{}-{:02} is not a valid month", year, month));
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let last = next_first.pred_opt().ok_or_else(invalid)?;
    Ok((first, last))
}

/// Lays ideas out over every day of the month. Ideas dated outside the month are ignored.
pub fn group_by_day(year: i32, month: u32, ideas: Vec<PostIdea>) -> Result<MonthCalendar, HelperError> {
    let (first, last) = month_bounds(year, month)?;

    let mut by_date: BTreeMap<NaiveDate, Vec<PostIdea>> = BTreeMap::new();
    for idea in ideas.into_iter().filter(|i| i.post_date >= first && i.post_date <= last) {
        by_date.entry(idea.post_date).or_default().push(idea);
    }

    let total_ideas = by_date.values().map(Vec::len).sum();
    let days = first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| CalendarDay {
            date,
            ideas: by_date.remove(&date).unwrap_or_default(),
        })
        .collect();

    Ok(MonthCalendar { year, month, total_ideas, days })
}

pub fn month_calendar(pool: &DbPool, year: i32, month: u32) -> Result<MonthCalendar, HelperError> {
    let (first, last) = month_bounds(year, month)?;
    let conn = pool.get()?;
    let ideas = planner_db_operations::read_post_ideas_between(&conn, first, last)?;
    group_by_day(year, month, ideas)
}

// ====================================================================
// ============================= EVENTS ===============================
// ====================================================================

pub fn list_events(pool: &DbPool) -> Result<Vec<EventCalendarEntry>, HelperError> {
    let conn = pool.get()?;
    Ok(planner_db_operations::read_all_events(&conn)?)
}

pub fn get_event(pool: &DbPool, id: i64) -> Result<EventCalendarEntry, HelperError> {
    let conn = pool.get()?;
    planner_db_operations::read_event(&conn, id)?
        .ok_or_else(|| HelperError::NotFound(format!("Event with id {}", id)))
}

pub fn create_event(pool: &DbPool, event: NewEventCalendarEntry) -> Result<EventCalendarEntry, HelperError> {
    require(&event.event_name, "Event name")?;
    let conn = pool.get()?;
    Ok(planner_db_operations::create_event(&conn, &event)?)
}

pub fn update_event(pool: &DbPool, id: i64, patch: EventCalendarEntryPatch) -> Result<EventCalendarEntry, HelperError> {
    if let Some(name) = &patch.event_name {
        require(name, "Event name")?;
    }
    let conn = pool.get()?;
    Ok(planner_db_operations::update_event(&conn, id, patch)?)
}

pub fn delete_event(pool: &DbPool, id: i64) -> Result<(), HelperError> {
    let conn = pool.get()?;
    Ok(planner_db_operations::delete_event(&conn, id)?)
}

pub fn upcoming_events(pool: &DbPool, today: NaiveDate, days: i64) -> Result<Vec<EventCalendarEntry>, HelperError> {
    if !(0..=MAX_UPCOMING_DAYS).contains(&days) {
        return Err(HelperError::validation(format!(
            "days must be between 0 and {}",
            MAX_UPCOMING_DAYS
        )));
    }
    let conn = pool.get()?;
    Ok(planner_db_operations::read_upcoming_events(&conn, today, days)?)
}

// ====================================================================
// ============================ DASHBOARD =============================
// ====================================================================

pub fn dashboard(pool: &DbPool, library: &Database, today: NaiveDate) -> Result<DashboardSummary, HelperError> {
    let conn = pool.get()?;
    let ideas = planner_db_operations::read_all_post_ideas(&conn)?;
    let draft_ideas = planner_db_operations::count_post_ideas_by_status(&conn, PostStatus::Draft)?;
    let upcoming = planner_db_operations::read_upcoming_events(&conn, today, DEFAULT_UPCOMING_DAYS)?;
    let profile = profiles_db_operations::read_current_profile(&conn)?;
    let saved_messages = library_db_operations::count_messages(library)?;

    let total_ideas = ideas.len();
    // Ideas come back in id order; the newest are at the end.
    let recent_ideas: Vec<PostIdea> = ideas.into_iter().rev().take(DASHBOARD_RECENT_IDEAS).collect();

    Ok(DashboardSummary {
        stats: DashboardStats {
            total_ideas,
            draft_ideas,
            upcoming_events: upcoming.len(),
            saved_messages,
        },
        recent_ideas,
        upcoming_events: upcoming,
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::db_setup;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use r2d2_sqlite::SqliteConnectionManager;

    fn pool() -> DbPool {
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .build(SqliteConnectionManager::memory())
            .unwrap();
        db_setup::setup_campaign_db(&mut pool.get().unwrap()).unwrap();
        pool
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn idea(brief: &str, post_date: NaiveDate) -> NewPostIdea {
        NewPostIdea {
            brief: brief.to_string(),
            content_type: ContentType::Text,
            theme_tags: vec![],
            status: PostStatus::Idea,
            post_date,
        }
    }

    #[test]
    fn generated_ideas_fall_within_two_weeks() {
        let today = date(2026, 10, 15);
        let mut rng = StdRng::seed_from_u64(7);
        let ideas = draft_generated_ideas(today, &mut rng);
        assert_eq!(ideas.len(), 5);
        for idea in &ideas {
            assert_eq!(idea.status, PostStatus::Idea);
            assert!(idea.post_date >= today && idea.post_date < today + Duration::days(14));
            assert_eq!(idea.theme_tags.len(), 3);
        }
        assert_eq!(ideas[1].content_type, ContentType::Video);
    }

    #[test]
    fn generating_persists_ideas() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(1);
        let created = generate_post_ideas(&pool, date(2026, 10, 15), &mut rng).unwrap();
        let ids: Vec<i64> = created.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(list_post_ideas(&pool, &PostIdeaFilter::default()).unwrap().len(), 5);
    }

    #[test]
    fn calendar_has_every_day_of_the_month() {
        let ideas = vec![
            PostIdea { id: 1, brief: "a".into(), content_type: ContentType::Text, theme_tags: vec![], status: PostStatus::Idea, post_date: date(2028, 2, 29) },
            PostIdea { id: 2, brief: "b".into(), content_type: ContentType::Text, theme_tags: vec![], status: PostStatus::Idea, post_date: date(2028, 2, 29) },
            PostIdea { id: 3, brief: "c".into(), content_type: ContentType::Text, theme_tags: vec![], status: PostStatus::Idea, post_date: date(2028, 3, 1) },
        ];
        let calendar = group_by_day(2028, 2, ideas).unwrap();
        assert_eq!(calendar.days.len(), 29);
        assert_eq!(calendar.total_ideas, 2);
        assert_eq!(calendar.days[28].ideas.len(), 2);
        assert!(calendar.days[0].ideas.is_empty());

        assert_eq!(group_by_day(2026, 12, vec![]).unwrap().days.len(), 31);
        assert!(matches!(group_by_day(2026, 13, vec![]), Err(HelperError::Validation(_))));
    }

    #[test]
    fn reschedule_only_changes_the_date() {
        let pool = pool();
        let created = create_post_idea(&pool, NewPostIdea {
            theme_tags: vec!["Water".into(), " water ".into()],
            status: PostStatus::Draft,
            ..idea("Tanker schedule", date(2026, 10, 20))
        })
        .unwrap();
        assert_eq!(created.theme_tags, vec!["Water".to_string()]);

        let moved = reschedule_post_idea(&pool, created.id, date(2026, 10, 31)).unwrap();
        assert_eq!(moved.post_date, date(2026, 10, 31));
        assert_eq!(moved.status, PostStatus::Draft);
        assert_eq!(moved.brief, "Tanker schedule");

        let calendar = month_calendar(&pool, 2026, 10).unwrap();
        assert_eq!(calendar.days[30].ideas[0].id, created.id);
    }

    #[test]
    fn comma_suffixed_tags_are_stored_once() {
        let pool = pool();
        let created = create_post_idea(&pool, NewPostIdea {
            theme_tags: vec!["Jobs,".into(), "Jobs".into()],
            ..idea("Job fair recap", date(2026, 11, 2))
        })
        .unwrap();
        assert_eq!(created.theme_tags, vec!["Jobs".to_string()]);
        assert_eq!(get_post_idea(&pool, created.id).unwrap().theme_tags, vec!["Jobs".to_string()]);

        let patched = update_post_idea(&pool, created.id, PostIdeaPatch {
            theme_tags: Some(vec!["Youth, jobs".into(), "youth".into()]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patched.theme_tags, vec!["Youth".to_string(), "jobs".to_string()]);
    }

    #[test]
    fn blank_brief_and_event_name_are_rejected() {
        let pool = pool();
        assert!(matches!(create_post_idea(&pool, idea(" ", date(2026, 1, 1))), Err(HelperError::Validation(_))));
        let event = NewEventCalendarEntry {
            event_name: String::new(),
            event_date: date(2026, 1, 1),
            location: String::new(),
            description: String::new(),
        };
        assert!(matches!(create_event(&pool, event), Err(HelperError::Validation(_))));
    }

    #[test]
    fn upcoming_window_is_validated() {
        let pool = pool();
        assert!(matches!(upcoming_events(&pool, date(2026, 1, 1), -1), Err(HelperError::Validation(_))));
        assert!(upcoming_events(&pool, date(2026, 1, 1), 0).unwrap().is_empty());
    }

    #[test]
    fn dashboard_counts_and_recent_ideas() {
        let pool = pool();
        let dir = tempfile::tempdir().unwrap();
        let library = Database::create(dir.path().join("library.db")).unwrap();
        db_setup::setup_library_db(&library).unwrap();

        let today = date(2026, 10, 15);
        for n in 0..6 {
            let mut new = idea(&format!("idea {}", n), today);
            if n % 2 == 0 {
                new.status = PostStatus::Draft;
            }
            create_post_idea(&pool, new).unwrap();
        }
        for (name, day) in [("past", date(2026, 10, 14)), ("today", today), ("edge", date(2026, 11, 14)), ("far", date(2026, 11, 15))] {
            create_event(&pool, NewEventCalendarEntry {
                event_name: name.to_string(),
                event_date: day,
                location: String::new(),
                description: String::new(),
            })
            .unwrap();
        }

        let summary = dashboard(&pool, &library, today).unwrap();
        assert_eq!(summary.stats.total_ideas, 6);
        assert_eq!(summary.stats.draft_ideas, 3);
        assert_eq!(summary.stats.upcoming_events, 2);
        assert_eq!(summary.stats.saved_messages, 0);
        let recent: Vec<&str> = summary.recent_ideas.iter().map(|i| i.brief.as_str()).collect();
        assert_eq!(recent, vec!["idea 5", "idea 4", "idea 3", "idea 2"]);
        let names: Vec<&str> = summary.upcoming_events.iter().map(|e| e.event_name.as_str()).collect();
        assert_eq!(names, vec!["today", "edge"]);
        assert!(summary.profile.is_none());
    }
}
