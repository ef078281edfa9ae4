use crate::helper::export_helpers::{export_file_name, slugify};
use crate::helper::templates::PRESS_RELEASE;
use crate::helper::{require, HelperError};
use crate::models::generator_models::{ExportFormat, PressRelease, PressReleaseRequest};
use crate::models::CampaignSettings;
use chrono::NaiveDate;
use tera::{Context, Tera};

/// "October 15, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "10/15/2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn generate_press_release(
    tera: &Tera,
    settings: &CampaignSettings,
    request: &PressReleaseRequest,
) -> Result<PressRelease, HelperError> {
    let event_name = request.event_name.trim();
    require(event_name, "Event name")?;
    require(&request.location, "Location")?;
    require(&request.summary, "Summary")?;
    let date = request
        .date
        .ok_or_else(|| HelperError::validation("Event date is required"))?;

    let mut ctx = Context::new();
    ctx.insert("event_name", event_name);
    ctx.insert("location", request.location.trim());
    ctx.insert("summary", request.summary.trim());
    ctx.insert("key_quotes", request.key_quotes.trim());
    ctx.insert("impact_statistics", request.impact_statistics.trim());
    ctx.insert("long_date", &long_date(date));
    ctx.insert("short_date", &short_date(date));
    ctx.insert("campaign_name", &settings.campaign_name);
    ctx.insert("contact_phone", &settings.contact_phone);
    ctx.insert("contact_email", &settings.contact_email);
    ctx.insert("website", &settings.website);

    let text = tera.render(PRESS_RELEASE, &ctx)?;
    log::debug!("Rendered press release for '{}'", event_name);

    Ok(PressRelease {
        text: text.trim_end().to_string(),
        export_file_name: export_file_name(&format!("press-release-{}", slugify(event_name)), ExportFormat::Doc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::templates::build_tera;

    fn request() -> PressReleaseRequest {
        PressReleaseRequest {
            event_name: "Ward 12 Water Project".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 5),
            location: "Shivaji Nagar Community Hall".to_string(),
            summary: "Launch of piped water for 1,200 homes.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn dates_render_in_us_style() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(long_date(date), "October 15, 2026");
        assert_eq!(short_date(date), "10/15/2026");
        assert_eq!(short_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()), "3/5/2026");
    }

    #[test]
    fn required_fields_are_checked() {
        let tera = build_tera().unwrap();
        let settings = CampaignSettings::default();
        let mut missing_date = request();
        missing_date.date = None;
        assert!(matches!(generate_press_release(&tera, &settings, &missing_date), Err(HelperError::Validation(_))));

        let mut missing_summary = request();
        missing_summary.summary = " ".to_string();
        assert!(matches!(generate_press_release(&tera, &settings, &missing_summary), Err(HelperError::Validation(_))));
    }

    #[test]
    fn optional_sections_only_appear_when_given() {
        let tera = build_tera().unwrap();
        let settings = CampaignSettings::default();

        let plain = generate_press_release(&tera, &settings, &request()).unwrap();
        assert!(plain.text.starts_with("FOR IMMEDIATE RELEASE"));
        assert!(plain.text.contains("1. Ward 12 Water Project: A Major Step Forward for Community Development"));
        assert!(plain.text.contains("Shivaji Nagar Community Hall - March 5, 2026 - Launch of piped water"));
        assert!(plain.text.contains("scheduled for 3/5/2026"));
        assert!(!plain.text.contains("KEY STATEMENTS"));
        assert!(!plain.text.contains("IMPACT & STATISTICS"));
        assert!(plain.text.contains("Phone: (555) 123-4567"));
        assert!(plain.text.contains("\n###\n"));
        assert_eq!(plain.export_file_name, "press-release-ward-12-water-project.doc");

        let mut full = request();
        full.key_quotes = "\"Water is a right.\"".to_string();
        full.impact_statistics = "1,200 households".to_string();
        let rich = generate_press_release(&tera, &settings, &full).unwrap();
        assert!(rich.text.contains("**KEY STATEMENTS:**\n\n\"Water is a right.\""));
        assert!(rich.text.contains("**IMPACT & STATISTICS:**\n\n1,200 households"));
    }
}
