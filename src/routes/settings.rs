use crate::helper::settings_helpers;
use crate::models::CampaignSettings;
use crate::routes::{failure, ok};
use crate::{AppState, DbPool};
use actix_web::{web, Responder};

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/settings", web::get().to(get_settings))
        .route("/settings", web::put().to(update_settings));
}

async fn get_settings(state: web::Data<AppState>) -> impl Responder {
    ok(settings_helpers::current_settings(&state))
}

async fn update_settings(
    pool: web::Data<DbPool>,
    state: web::Data<AppState>,
    payload: web::Json<CampaignSettings>,
) -> impl Responder {
    match settings_helpers::save_settings(&pool, &state, payload.into_inner()) {
        Ok(settings) => ok(settings),
        Err(e) => failure("Failed to save settings", e),
    }
}
