use crate::helper::sanitization_helpers::is_valid_hex_color;
use crate::helper::HelperError;
use crate::models::db_operations::profiles_db_operations;
use crate::models::{BrandKit, BrandKitPatch, CandidateProfile, CandidateProfilePatch, NewCandidateProfile};
use crate::DbPool;

fn check_color(label: &str, value: &str) -> Result<(), HelperError> {
    if is_valid_hex_color(value) {
        Ok(())
    } else {
        Err(HelperError::validation(format!(
            "{} color '{}' must be a hex value like #1E3A8A",
            label, value
        )))
    }
}

fn validate_brand_kit(kit: &BrandKit) -> Result<(), HelperError> {
    check_color("Primary", &kit.primary_color)?;
    check_color("Secondary", &kit.secondary_color)?;
    check_color("Accent", &kit.accent_color)
}

fn validate_brand_kit_patch(kit: &BrandKitPatch) -> Result<(), HelperError> {
    for (label, value) in [
        ("Primary", &kit.primary_color),
        ("Secondary", &kit.secondary_color),
        ("Accent", &kit.accent_color),
    ] {
        if let Some(color) = value {
            check_color(label, color)?;
        }
    }
    Ok(())
}

pub fn list_profiles(pool: &DbPool) -> Result<Vec<CandidateProfile>, HelperError> {
    let conn = pool.get()?;
    Ok(profiles_db_operations::read_all_profiles(&conn)?)
}

pub fn get_profile(pool: &DbPool, id: i64) -> Result<CandidateProfile, HelperError> {
    let conn = pool.get()?;
    profiles_db_operations::read_profile(&conn, id)?
        .ok_or_else(|| HelperError::NotFound(format!("Profile with id {}", id)))
}

/// The profile the rest of the app works with, if one has been entered.
pub fn get_current_profile(pool: &DbPool) -> Result<Option<CandidateProfile>, HelperError> {
    let conn = pool.get()?;
    Ok(profiles_db_operations::read_current_profile(&conn)?)
}

pub fn create_profile(pool: &DbPool, mut profile: NewCandidateProfile) -> Result<CandidateProfile, HelperError> {
    validate_brand_kit(&profile.brand_kit)?;
    profile.brand_kit.logo = profile.brand_kit.logo.filter(|logo| !logo.trim().is_empty());

    let conn = pool.get()?;
    let created = profiles_db_operations::create_profile(&conn, &profile)?;
    log::info!("Created candidate profile {}", created.id);
    Ok(created)
}

pub fn update_profile(pool: &DbPool, id: i64, patch: CandidateProfilePatch) -> Result<CandidateProfile, HelperError> {
    if let Some(kit) = &patch.brand_kit {
        validate_brand_kit_patch(kit)?;
    }
    let conn = pool.get()?;
    Ok(profiles_db_operations::update_profile(&conn, id, patch)?)
}

pub fn delete_profile(pool: &DbPool, id: i64) -> Result<(), HelperError> {
    let conn = pool.get()?;
    profiles_db_operations::delete_profile(&conn, id)?;
    log::info!("Deleted candidate profile {}", id);
    Ok(())
}
