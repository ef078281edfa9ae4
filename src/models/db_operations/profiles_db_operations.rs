use crate::models::{BrandKit, CampaignSettings, CandidateProfile, CandidateProfilePatch, NewCandidateProfile};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::DbError;

const PROFILE_COLUMNS: &str = "id, personal_background, political_history, achievements, vision, social_work, core_positioning, party_manifesto, brand_kit";

fn row_to_profile(row: &Row) -> rusqlite::Result<(CandidateProfile, String)> {
    let brand_kit_json: String = row.get(8)?;
    Ok((
        CandidateProfile {
            id: row.get(0)?,
            personal_background: row.get(1)?,
            political_history: row.get(2)?,
            achievements: row.get(3)?,
            vision: row.get(4)?,
            social_work: row.get(5)?,
            core_positioning: row.get(6)?,
            party_manifesto: row.get(7)?,
            brand_kit: BrandKit::default(),
        },
        brand_kit_json,
    ))
}

// The brand kit is stored as a JSON column; decode it after the row closure returns.
fn finish_profile((mut profile, brand_kit_json): (CandidateProfile, String)) -> Result<CandidateProfile, DbError> {
    profile.brand_kit = serde_json::from_str(&brand_kit_json)?;
    Ok(profile)
}

pub fn create_profile(conn: &Connection, profile: &NewCandidateProfile) -> Result<CandidateProfile, DbError> {
    let brand_kit_json = serde_json::to_string(&profile.brand_kit)?;
    conn.execute(
        "INSERT INTO candidate_profiles (personal_background, political_history, achievements, vision, social_work, core_positioning, party_manifesto, brand_kit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            profile.personal_background,
            profile.political_history,
            profile.achievements,
            profile.vision,
            profile.social_work,
            profile.core_positioning,
            profile.party_manifesto,
            brand_kit_json
        ],
    )?;
    let id = conn.last_insert_rowid();
    read_profile(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Profile with id {}", id)))
}

pub fn create_profiles(conn: &mut Connection, profiles: &[NewCandidateProfile]) -> Result<Vec<CandidateProfile>, DbError> {
    let tx = conn.transaction()?;
    let mut created = Vec::with_capacity(profiles.len());
    for profile in profiles {
        created.push(create_profile(&tx, profile)?);
    }
    tx.commit()?;
    Ok(created)
}

pub fn read_all_profiles(conn: &Connection) -> Result<Vec<CandidateProfile>, DbError> {
    let mut stmt = conn.prepare(&format!("SELECT {} FROM candidate_profiles ORDER BY id", PROFILE_COLUMNS))?;
    let rows = stmt.query_map([], row_to_profile)?;
    rows.map(|r| finish_profile(r?)).collect()
}

pub fn read_profile(conn: &Connection, id: i64) -> Result<Option<CandidateProfile>, DbError> {
    let raw = conn
        .query_row(
            &format!("SELECT {} FROM candidate_profiles WHERE id = ?1", PROFILE_COLUMNS),
            [id],
            row_to_profile,
        )
        .optional()?;
    raw.map(finish_profile).transpose()
}

/// The UI treats the oldest stored profile as "the" candidate.
pub fn read_current_profile(conn: &Connection) -> Result<Option<CandidateProfile>, DbError> {
    let raw = conn
        .query_row(
            &format!("SELECT {} FROM candidate_profiles ORDER BY id LIMIT 1", PROFILE_COLUMNS),
            [],
            row_to_profile,
        )
        .optional()?;
    raw.map(finish_profile).transpose()
}

pub fn update_profile(conn: &Connection, id: i64, patch: CandidateProfilePatch) -> Result<CandidateProfile, DbError> {
    let mut profile = read_profile(conn, id)?.ok_or_else(|| DbError::NotFound(format!("Profile with id {}", id)))?;
    profile.apply(patch);
    let brand_kit_json = serde_json::to_string(&profile.brand_kit)?;
    conn.execute(
        "UPDATE candidate_profiles SET personal_background = ?1, political_history = ?2, achievements = ?3, vision = ?4,
         social_work = ?5, core_positioning = ?6, party_manifesto = ?7, brand_kit = ?8 WHERE id = ?9",
        params![
            profile.personal_background,
            profile.political_history,
            profile.achievements,
            profile.vision,
            profile.social_work,
            profile.core_positioning,
            profile.party_manifesto,
            brand_kit_json,
            id
        ],
    )?;
    Ok(profile)
}

pub fn delete_profile(conn: &Connection, id: i64) -> Result<(), DbError> {
    match conn.execute("DELETE FROM candidate_profiles WHERE id = ?1", [id])? {
        0 => Err(DbError::NotFound(format!("Profile with id {}", id))),
        _ => Ok(()),
    }
}

// --- Settings ---

pub fn read_setting(conn: &Connection, key: &str) -> Result<Option<String>, DbError> {
    Ok(conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| row.get(0))
        .optional()?)
}

pub fn update_setting(conn: &Connection, key: &str, value: &str) -> Result<(), DbError> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        [key, value],
    )?;
    Ok(())
}

pub fn read_all_settings(conn: &Connection) -> Result<Vec<(String, String)>, DbError> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings ORDER BY key")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Reads the campaign settings, falling back to the defaults for missing keys.
pub fn read_campaign_settings(conn: &Connection) -> Result<CampaignSettings, DbError> {
    let defaults = CampaignSettings::default();
    Ok(CampaignSettings {
        campaign_name: read_setting(conn, "campaign_name")?.unwrap_or(defaults.campaign_name),
        contact_phone: read_setting(conn, "contact_phone")?.unwrap_or(defaults.contact_phone),
        contact_email: read_setting(conn, "contact_email")?.unwrap_or(defaults.contact_email),
        website: read_setting(conn, "website")?.unwrap_or(defaults.website),
    })
}

pub fn write_campaign_settings(conn: &mut Connection, settings: &CampaignSettings) -> Result<(), DbError> {
    let tx = conn.transaction()?;
    for (key, value) in [
        ("campaign_name", &settings.campaign_name),
        ("contact_phone", &settings.contact_phone),
        ("contact_email", &settings.contact_email),
        ("website", &settings.website),
    ] {
        tx.execute("INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)", params![key, value])?;
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BrandKitPatch;
    use crate::setup::db_setup;

    fn conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        db_setup::setup_campaign_db(&mut conn).unwrap();
        conn
    }

    fn sample(background: &str) -> NewCandidateProfile {
        NewCandidateProfile {
            personal_background: background.to_string(),
            vision: "Clean water for every ward".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn ids_increase_and_are_not_reused_after_delete() {
        let conn = conn();
        let a = create_profile(&conn, &sample("a")).unwrap();
        let b = create_profile(&conn, &sample("b")).unwrap();
        assert!(b.id > a.id);

        delete_profile(&conn, b.id).unwrap();
        let c = create_profile(&conn, &sample("c")).unwrap();
        assert!(c.id > b.id);

        let all = read_all_profiles(&conn).unwrap();
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a.id, c.id]);
    }

    #[test]
    fn current_profile_is_the_oldest_record() {
        let conn = conn();
        assert!(read_current_profile(&conn).unwrap().is_none());
        let first = create_profile(&conn, &sample("first")).unwrap();
        create_profile(&conn, &sample("second")).unwrap();
        assert_eq!(read_current_profile(&conn).unwrap().unwrap().id, first.id);
    }

    #[test]
    fn update_merges_brand_kit_fields() {
        let conn = conn();
        let created = create_profile(&conn, &sample("bg")).unwrap();
        let patch = CandidateProfilePatch {
            achievements: Some("Built 12 schools".to_string()),
            brand_kit: Some(BrandKitPatch {
                slogan: Some("Forward Together".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = update_profile(&conn, created.id, patch).unwrap();
        assert_eq!(updated.personal_background, "bg");
        assert_eq!(updated.achievements, "Built 12 schools");
        assert_eq!(updated.brand_kit.slogan, "Forward Together");
        assert_eq!(updated.brand_kit.primary_color, "#1E3A8A");

        let reread = read_profile(&conn, created.id).unwrap().unwrap();
        assert_eq!(reread, updated);
    }

    #[test]
    fn missing_profile_is_not_found() {
        let conn = conn();
        assert!(matches!(delete_profile(&conn, 42), Err(DbError::NotFound(_))));
        assert!(matches!(
            update_profile(&conn, 42, CandidateProfilePatch::default()),
            Err(DbError::NotFound(_))
        ));
    }

    #[test]
    fn campaign_settings_round_through_the_settings_table() {
        let mut conn = conn();
        assert_eq!(read_campaign_settings(&conn).unwrap(), CampaignSettings::default());
        let custom = CampaignSettings {
            campaign_name: "Ward 7 Team".to_string(),
            ..CampaignSettings::default()
        };
        write_campaign_settings(&mut conn, &custom).unwrap();
        assert_eq!(read_campaign_settings(&conn).unwrap().campaign_name, "Ward 7 Team");
    }

    #[test]
    fn unreadable_settings_table_is_an_error_not_a_default() {
        let conn = conn();
        conn.execute("DROP TABLE settings", []).unwrap();
        assert!(matches!(read_setting(&conn, "campaign_name"), Err(DbError::Rusqlite(_))));
        assert!(read_campaign_settings(&conn).is_err());
    }
}
