use crate::helper::planner_helpers;
use crate::routes::{failure, ok};
use crate::DbPool;
use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use redb::Database;

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/is_server_active", web::get().to(is_server_active))
        .route("/dashboard", web::get().to(get_dashboard));
}

async fn is_server_active() -> impl Responder {
    HttpResponse::Ok().body("active")
}

async fn get_dashboard(pool: web::Data<DbPool>, library: web::Data<Database>) -> impl Responder {
    let today = Local::now().date_naive();
    match planner_helpers::dashboard(&pool, &library, today) {
        Ok(summary) => ok(summary),
        Err(e) => failure("Failed to load dashboard", e),
    }
}
