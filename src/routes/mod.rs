use crate::config::Config;
use crate::helper::export_helpers::ExportFile;
use crate::helper::HelperError;
use actix_web::error::InternalError;
use actix_web::rt::time::sleep;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::time::Duration;

pub mod export;
pub mod generators;
pub mod library;
pub mod planner;
pub mod profile;
pub mod public;
pub mod settings;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

pub(crate) fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse { success: true, data: Some(data), error: None })
}

pub(crate) fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse { success: true, data: Some(data), error: None })
}

pub(crate) fn deleted() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> { success: true, data: None, error: None })
}

pub(crate) fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()> { success: false, data: None, error: Some(message.into()) })
}

/// Maps a helper failure onto the JSON error envelope. Storage problems are
/// logged with `context` and reported without internal detail.
pub(crate) fn failure(context: &str, err: HelperError) -> HttpResponse {
    if err.is_not_found() {
        log::debug!("{}: {}", context, err);
        return HttpResponse::NotFound().json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(err.to_string()),
        });
    }
    match err {
        HelperError::Validation(message) => {
            log::warn!("{}: rejected input: {}", context, message);
            bad_request(message)
        }
        other => {
            log::error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ApiResponse::<()> {
                success: false,
                data: None,
                error: Some(format!("{}.", context)),
            })
        }
    }
}

/// Every API route plus the extractor error handlers. The server mounts this under `/api`.
pub fn config_all(cfg: &mut web::ServiceConfig) {
    config_extractors(cfg);
    public::config_api(cfg);
    profile::config_api(cfg);
    planner::config_api(cfg);
    library::config_api(cfg);
    generators::config_api(cfg);
    export::config_api(cfg);
    settings::config_api(cfg);
}

/// Makes malformed JSON bodies, query strings and path ids answer with the
/// same envelope as every other rejected request.
pub fn config_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    }));
}

pub(crate) fn attachment(file: ExportFile) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.file_name)],
        })
        .body(file.body)
}

/// Stands in for model latency before any generated content is returned.
pub(crate) async fn simulate_generation(config: &Config) {
    let delay = config.generation_delay();
    if delay > Duration::ZERO {
        sleep(delay).await;
    }
}
