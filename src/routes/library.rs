use crate::helper::library_helpers;
use crate::models::{LibraryMessagePatch, NewLibraryMessage};
use crate::routes::{created, deleted, failure, ok};
use actix_web::{web, Responder};
use redb::Database;

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .route("", web::get().to(list_messages))
            .route("", web::post().to(save_message))
            .route("/{id}", web::get().to(get_message))
            .route("/{id}", web::put().to(update_message))
            .route("/{id}", web::delete().to(delete_message)),
    );
}

async fn list_messages(db: web::Data<Database>) -> impl Responder {
    match library_helpers::list_messages(&db) {
        Ok(messages) => ok(messages),
        Err(e) => failure("Failed to retrieve message library", e),
    }
}

async fn get_message(db: web::Data<Database>, id: web::Path<u64>) -> impl Responder {
    match library_helpers::get_message(&db, id.into_inner()) {
        Ok(message) => ok(message),
        Err(e) => failure("Failed to retrieve message", e),
    }
}

async fn save_message(db: web::Data<Database>, payload: web::Json<NewLibraryMessage>) -> impl Responder {
    match library_helpers::save_message(&db, payload.into_inner()) {
        Ok(message) => created(message),
        Err(e) => failure("Failed to save message", e),
    }
}

async fn update_message(
    db: web::Data<Database>,
    id: web::Path<u64>,
    payload: web::Json<LibraryMessagePatch>,
) -> impl Responder {
    match library_helpers::update_message(&db, id.into_inner(), payload.into_inner()) {
        Ok(message) => ok(message),
        Err(e) => failure("Failed to update message", e),
    }
}

async fn delete_message(db: web::Data<Database>, id: web::Path<u64>) -> impl Responder {
    match library_helpers::delete_message(&db, id.into_inner()) {
        Ok(()) => deleted(),
        Err(e) => failure("Failed to delete message", e),
    }
}
