use std::sync::{Arc, RwLock};

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::models::CampaignSettings;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Runtime state shared by every worker. Settings are loaded from the
/// campaign database at startup and replaced whenever they are saved.
pub struct AppState {
    pub settings: Arc<RwLock<CampaignSettings>>,
}

impl AppState {
    pub fn new(settings: CampaignSettings) -> Self {
        AppState {
            settings: Arc::new(RwLock::new(settings)),
        }
    }
}

pub mod config;
pub mod helper;
pub mod models;
pub mod routes;
pub mod setup;
