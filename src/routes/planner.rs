use crate::config::Config;
use crate::helper::planner_helpers;
use crate::models::{
    EventCalendarEntryPatch, NewEventCalendarEntry, NewPostIdea, PostIdeaFilter, PostIdeaPatch,
};
use crate::routes::{created, deleted, failure, ok, simulate_generation};
use crate::DbPool;
use actix_web::{web, Responder};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

#[derive(Deserialize)]
struct CalendarQuery {
    year: Option<i32>,
    month: Option<u32>,
}

#[derive(Deserialize)]
struct UpcomingQuery {
    days: Option<i64>,
}

#[derive(Deserialize)]
struct RescheduleRequest {
    post_date: NaiveDate,
}

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/post-ideas")
            .route("", web::get().to(list_post_ideas))
            .route("", web::post().to(create_post_idea))
            .route("/generate", web::post().to(generate_post_ideas))
            .route("/calendar", web::get().to(get_calendar))
            .route("/{id}", web::get().to(get_post_idea))
            .route("/{id}", web::put().to(update_post_idea))
            .route("/{id}", web::delete().to(delete_post_idea))
            .route("/{id}/date", web::put().to(reschedule_post_idea)),
    )
    .service(
        web::scope("/events")
            .route("", web::get().to(list_events))
            .route("", web::post().to(create_event))
            .route("/upcoming", web::get().to(get_upcoming_events))
            .route("/{id}", web::get().to(get_event))
            .route("/{id}", web::put().to(update_event))
            .route("/{id}", web::delete().to(delete_event)),
    );
}

// --- Post ideas ---

async fn list_post_ideas(pool: web::Data<DbPool>, filter: web::Query<PostIdeaFilter>) -> impl Responder {
    match planner_helpers::list_post_ideas(&pool, &filter) {
        Ok(ideas) => ok(ideas),
        Err(e) => failure("Failed to retrieve post ideas", e),
    }
}

async fn get_post_idea(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match planner_helpers::get_post_idea(&pool, id.into_inner()) {
        Ok(idea) => ok(idea),
        Err(e) => failure("Failed to retrieve post idea", e),
    }
}

async fn create_post_idea(pool: web::Data<DbPool>, payload: web::Json<NewPostIdea>) -> impl Responder {
    match planner_helpers::create_post_idea(&pool, payload.into_inner()) {
        Ok(idea) => created(idea),
        Err(e) => failure("Failed to create post idea", e),
    }
}

async fn update_post_idea(
    pool: web::Data<DbPool>,
    id: web::Path<i64>,
    payload: web::Json<PostIdeaPatch>,
) -> impl Responder {
    match planner_helpers::update_post_idea(&pool, id.into_inner(), payload.into_inner()) {
        Ok(idea) => ok(idea),
        Err(e) => failure("Failed to update post idea", e),
    }
}

async fn reschedule_post_idea(
    pool: web::Data<DbPool>,
    id: web::Path<i64>,
    payload: web::Json<RescheduleRequest>,
) -> impl Responder {
    match planner_helpers::reschedule_post_idea(&pool, id.into_inner(), payload.post_date) {
        Ok(idea) => ok(idea),
        Err(e) => failure("Failed to reschedule post idea", e),
    }
}

async fn delete_post_idea(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match planner_helpers::delete_post_idea(&pool, id.into_inner()) {
        Ok(()) => deleted(),
        Err(e) => failure("Failed to delete post idea", e),
    }
}

async fn generate_post_ideas(pool: web::Data<DbPool>, config: web::Data<Config>) -> impl Responder {
    simulate_generation(&config).await;
    let today = Local::now().date_naive();
    match planner_helpers::generate_post_ideas(&pool, today, &mut rand::thread_rng()) {
        Ok(ideas) => created(ideas),
        Err(e) => failure("Failed to generate post ideas", e),
    }
}

async fn get_calendar(pool: web::Data<DbPool>, query: web::Query<CalendarQuery>) -> impl Responder {
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    match planner_helpers::month_calendar(&pool, year, month) {
        Ok(calendar) => ok(calendar),
        Err(e) => failure("Failed to build calendar", e),
    }
}

// --- Events ---

async fn list_events(pool: web::Data<DbPool>) -> impl Responder {
    match planner_helpers::list_events(&pool) {
        Ok(events) => ok(events),
        Err(e) => failure("Failed to retrieve events", e),
    }
}

async fn get_upcoming_events(pool: web::Data<DbPool>, query: web::Query<UpcomingQuery>) -> impl Responder {
    let today = Local::now().date_naive();
    let days = query.days.unwrap_or(planner_helpers::DEFAULT_UPCOMING_DAYS);
    match planner_helpers::upcoming_events(&pool, today, days) {
        Ok(events) => ok(events),
        Err(e) => failure("Failed to retrieve upcoming events", e),
    }
}

async fn get_event(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match planner_helpers::get_event(&pool, id.into_inner()) {
        Ok(event) => ok(event),
        Err(e) => failure("Failed to retrieve event", e),
    }
}

async fn create_event(pool: web::Data<DbPool>, payload: web::Json<NewEventCalendarEntry>) -> impl Responder {
    match planner_helpers::create_event(&pool, payload.into_inner()) {
        Ok(event) => created(event),
        Err(e) => failure("Failed to create event", e),
    }
}

async fn update_event(
    pool: web::Data<DbPool>,
    id: web::Path<i64>,
    payload: web::Json<EventCalendarEntryPatch>,
) -> impl Responder {
    match planner_helpers::update_event(&pool, id.into_inner(), payload.into_inner()) {
        Ok(event) => ok(event),
        Err(e) => failure("Failed to update event", e),
    }
}

async fn delete_event(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match planner_helpers::delete_event(&pool, id.into_inner()) {
        Ok(()) => deleted(),
        Err(e) => failure("Failed to delete event", e),
    }
}
