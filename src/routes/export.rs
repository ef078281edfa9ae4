use crate::helper::export_helpers;
use crate::models::generator_models::ExportRequest;
use crate::routes::{attachment, failure};
use actix_web::{web, Responder};

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/export", web::post().to(export_content));
}

async fn export_content(payload: web::Json<ExportRequest>) -> impl Responder {
    match export_helpers::build_export(&payload) {
        Ok(file) => {
            log::info!("Exporting {}", file.file_name);
            attachment(file)
        }
        Err(e) => failure("Failed to export content", e),
    }
}
