#![allow(dead_code)]

use actix_web::web;
use campaign_hub::config::{Config, WebConfig};
use campaign_hub::helper::templates;
use campaign_hub::models::CampaignSettings;
use campaign_hub::setup::db_setup;
use campaign_hub::{AppState, DbPool};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use redb::Database;
use serde_json::Value;
use tempfile::TempDir;

/// Shared state for one test app: an in-memory campaign db, a throwaway
/// library file and no generation delay.
pub struct TestContext {
    pub pool: web::Data<DbPool>,
    pub library: web::Data<Database>,
    pub state: web::Data<AppState>,
    tera: web::Data<tera::Tera>,
    config: web::Data<Config>,
    _dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager).unwrap();
        db_setup::setup_campaign_db(&mut pool.get().unwrap()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let library = Database::create(dir.path().join("library.db")).unwrap();
        db_setup::setup_library_db(&library).unwrap();

        let config = Config {
            web: WebConfig { host: "127.0.0.1".to_string(), port: 0 },
            database_path: dir.path().display().to_string(),
            allowed_origins: "*".to_string(),
            log_level: "debug".to_string(),
            generation_delay_ms: 0,
            seed_fixtures: false,
        };

        TestContext {
            pool: web::Data::new(pool),
            library: web::Data::new(library),
            state: web::Data::new(AppState::new(CampaignSettings::default())),
            tera: web::Data::new(templates::build_tera().unwrap()),
            config: web::Data::new(config),
            _dir: dir,
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.pool.clone())
            .app_data(self.library.clone())
            .app_data(self.state.clone())
            .app_data(self.tera.clone())
            .app_data(self.config.clone())
            .service(web::scope("/api").configure(campaign_hub::routes::config_all));
    }
}

/// Asserts the envelope reports success and hands back `data`.
pub fn data(body: Value) -> Value {
    assert_eq!(body["success"], Value::Bool(true), "unexpected envelope: {}", body);
    body["data"].clone()
}

/// Asserts the envelope reports failure and hands back `error`.
pub fn error(body: Value) -> String {
    assert_eq!(body["success"], Value::Bool(false), "unexpected envelope: {}", body);
    assert!(body["data"].is_null());
    body["error"].as_str().unwrap_or_default().to_string()
}
