use crate::helper::export_helpers::{self, ProfileDocument};
use crate::helper::{profile_helpers, settings_helpers};
use crate::models::generator_models::ExportFormat;
use crate::models::{CandidateProfilePatch, NewCandidateProfile};
use crate::routes::{attachment, created, deleted, failure, ok};
use crate::{AppState, DbPool};
use actix_web::{web, Responder};
use serde::Deserialize;
use tera::Tera;

#[derive(Deserialize)]
struct DocumentQuery {
    format: Option<ExportFormat>,
}

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .route("", web::get().to(list_profiles))
            .route("", web::post().to(create_profile))
            .route("/current", web::get().to(get_current_profile))
            .route("/{id}", web::get().to(get_profile))
            .route("/{id}", web::put().to(update_profile))
            .route("/{id}", web::delete().to(delete_profile))
            .route("/{id}/dossier", web::get().to(export_dossier))
            .route("/{id}/designer-brief", web::get().to(export_designer_brief)),
    );
}

async fn list_profiles(pool: web::Data<DbPool>) -> impl Responder {
    match profile_helpers::list_profiles(&pool) {
        Ok(profiles) => ok(profiles),
        Err(e) => failure("Failed to retrieve profiles", e),
    }
}

async fn get_current_profile(pool: web::Data<DbPool>) -> impl Responder {
    // `data: null` when no profile has been entered yet.
    match profile_helpers::get_current_profile(&pool) {
        Ok(profile) => ok(profile),
        Err(e) => failure("Failed to retrieve current profile", e),
    }
}

async fn get_profile(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match profile_helpers::get_profile(&pool, id.into_inner()) {
        Ok(profile) => ok(profile),
        Err(e) => failure("Failed to retrieve profile", e),
    }
}

async fn create_profile(pool: web::Data<DbPool>, payload: web::Json<NewCandidateProfile>) -> impl Responder {
    match profile_helpers::create_profile(&pool, payload.into_inner()) {
        Ok(profile) => created(profile),
        Err(e) => failure("Failed to create profile", e),
    }
}

async fn update_profile(
    pool: web::Data<DbPool>,
    id: web::Path<i64>,
    payload: web::Json<CandidateProfilePatch>,
) -> impl Responder {
    match profile_helpers::update_profile(&pool, id.into_inner(), payload.into_inner()) {
        Ok(profile) => ok(profile),
        Err(e) => failure("Failed to update profile", e),
    }
}

async fn delete_profile(pool: web::Data<DbPool>, id: web::Path<i64>) -> impl Responder {
    match profile_helpers::delete_profile(&pool, id.into_inner()) {
        Ok(()) => deleted(),
        Err(e) => failure("Failed to delete profile", e),
    }
}

async fn export_dossier(
    pool: web::Data<DbPool>,
    state: web::Data<AppState>,
    tera: web::Data<Tera>,
    id: web::Path<i64>,
    query: web::Query<DocumentQuery>,
) -> impl Responder {
    export_profile_document(&pool, &state, &tera, id.into_inner(), ProfileDocument::Dossier, query.format)
}

async fn export_designer_brief(
    pool: web::Data<DbPool>,
    state: web::Data<AppState>,
    tera: web::Data<Tera>,
    id: web::Path<i64>,
    query: web::Query<DocumentQuery>,
) -> impl Responder {
    export_profile_document(&pool, &state, &tera, id.into_inner(), ProfileDocument::DesignerBrief, query.format)
}

fn export_profile_document(
    pool: &DbPool,
    state: &AppState,
    tera: &Tera,
    id: i64,
    document: ProfileDocument,
    format: Option<ExportFormat>,
) -> actix_web::HttpResponse {
    let settings = settings_helpers::current_settings(state);
    let rendered = profile_helpers::get_profile(pool, id).and_then(|profile| {
        export_helpers::render_profile_document(tera, &settings, &profile, document, format.unwrap_or(ExportFormat::Txt))
    });
    match rendered {
        Ok(file) => attachment(file),
        Err(e) => failure("Failed to export profile document", e),
    }
}
