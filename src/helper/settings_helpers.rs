use crate::helper::{require, HelperError};
use crate::models::db_operations::profiles_db_operations;
use crate::models::CampaignSettings;
use crate::{AppState, DbPool};
use rusqlite::Connection;

pub fn load_settings(conn: &Connection) -> Result<CampaignSettings, HelperError> {
    Ok(profiles_db_operations::read_campaign_settings(conn)?)
}

/// Snapshot of the live settings. A poisoned lock still holds the last good value.
pub fn current_settings(state: &AppState) -> CampaignSettings {
    match state.settings.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => {
            log::warn!("Campaign settings lock was poisoned; using last stored value");
            poisoned.into_inner().clone()
        }
    }
}

fn validate(settings: &CampaignSettings) -> Result<(), HelperError> {
    require(&settings.campaign_name, "Campaign name")?;
    require(&settings.contact_phone, "Contact phone")?;
    require(&settings.contact_email, "Contact email")?;
    if !settings.contact_email.contains('@') {
        return Err(HelperError::validation("Contact email must contain '@'"));
    }
    require(&settings.website, "Website")
}

/// Persists new settings and swaps them into the shared state.
pub fn save_settings(pool: &DbPool, state: &AppState, settings: CampaignSettings) -> Result<CampaignSettings, HelperError> {
    let settings = CampaignSettings {
        campaign_name: settings.campaign_name.trim().to_string(),
        contact_phone: settings.contact_phone.trim().to_string(),
        contact_email: settings.contact_email.trim().to_string(),
        website: settings.website.trim().to_string(),
    };
    validate(&settings)?;

    let mut conn = pool.get()?;
    profiles_db_operations::write_campaign_settings(&mut conn, &settings)?;

    match state.settings.write() {
        Ok(mut guard) => *guard = settings.clone(),
        Err(poisoned) => {
            log::warn!("Campaign settings lock was poisoned; overwriting with saved value");
            *poisoned.into_inner() = settings.clone();
        }
    }
    log::info!("Campaign settings updated");
    Ok(settings)
}
