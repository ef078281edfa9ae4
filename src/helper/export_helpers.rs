use crate::helper::sanitization_helpers::{html_document, markdown_to_safe_html};
use crate::helper::templates::{DESIGNER_BRIEF, PROFILE_DOSSIER};
use crate::helper::HelperError;
use crate::models::generator_models::{ExportFormat, ExportRequest};
use crate::models::{CampaignSettings, CandidateProfile};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tera::{Context, Tera};

const NOT_PROVIDED: &str = "Not provided.";

/// A generated file ready to be sent as an attachment.
#[derive(Debug)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileDocument {
    Dossier,
    DesignerBrief,
}

#[derive(Serialize)]
struct DossierSection<'a> {
    heading: &'static str,
    body: &'a str,
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

fn unsafe_file_chars_regex() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r#"[/\\:*?"<>|]"#).expect("file name pattern"))
}

/// Whitespace runs become `-` and the result is lower-cased.
pub fn slugify(value: &str) -> String {
    let cleaned = unsafe_file_chars_regex().replace_all(value.trim(), "");
    whitespace_regex().replace_all(&cleaned, "-").to_lowercase()
}

pub fn export_file_name(stem: &str, format: ExportFormat) -> String {
    format!("{}.{}", stem, format.extension())
}

/// Turns client-held text (or an audio data URL) into a downloadable file.
pub fn build_export(request: &ExportRequest) -> Result<ExportFile, HelperError> {
    let stem = slugify(&request.file_stem);
    if stem.is_empty() {
        return Err(HelperError::validation("File name is required"));
    }
    if request.content.trim().is_empty() {
        return Err(HelperError::validation("Nothing to export"));
    }
    if request.format.is_audio() && !request.content.starts_with("data:audio/") {
        return Err(HelperError::validation("Audio exports expect an audio data URL"));
    }

    let body = match request.format {
        ExportFormat::Html => html_document(request.file_stem.trim(), &markdown_to_safe_html(&request.content)),
        _ => request.content.clone(),
    };

    Ok(ExportFile {
        file_name: export_file_name(&stem, request.format),
        content_type: request.format.content_type(),
        body,
    })
}

fn or_not_provided(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value.trim()
    }
}

fn profile_context(profile: &CandidateProfile, settings: &CampaignSettings) -> Context {
    let mut ctx = Context::new();
    ctx.insert("campaign_name", &settings.campaign_name);
    ctx.insert("contact_phone", &settings.contact_phone);
    ctx.insert("contact_email", &settings.contact_email);
    ctx.insert("website", &settings.website);
    ctx.insert("slogan", profile.brand_kit.slogan.trim());
    ctx.insert("brand_kit", &profile.brand_kit);
    ctx.insert("core_positioning", profile.core_positioning.trim());

    let sections = [
        DossierSection { heading: "Core Positioning", body: or_not_provided(&profile.core_positioning) },
        DossierSection { heading: "Personal Background", body: or_not_provided(&profile.personal_background) },
        DossierSection { heading: "Political History", body: or_not_provided(&profile.political_history) },
        DossierSection { heading: "Key Achievements", body: or_not_provided(&profile.achievements) },
        DossierSection { heading: "Vision", body: or_not_provided(&profile.vision) },
        DossierSection { heading: "Social Work", body: or_not_provided(&profile.social_work) },
        DossierSection { heading: "Party Manifesto", body: or_not_provided(&profile.party_manifesto) },
    ];
    ctx.insert("sections", &sections);
    ctx
}

/// Renders the candidate dossier or the designer brief as markdown text or sanitized HTML.
pub fn render_profile_document(
    tera: &Tera,
    settings: &CampaignSettings,
    profile: &CandidateProfile,
    document: ProfileDocument,
    format: ExportFormat,
) -> Result<ExportFile, HelperError> {
    if format.is_audio() {
        return Err(HelperError::validation("Profile documents cannot be exported as audio"));
    }

    let (template, stem, title) = match document {
        ProfileDocument::Dossier => (PROFILE_DOSSIER, format!("candidate-dossier-{}", profile.id), "Candidate Dossier"),
        ProfileDocument::DesignerBrief => (DESIGNER_BRIEF, format!("designer-brief-{}", profile.id), "Designer Brief"),
    };

    let markdown = tera.render(template, &profile_context(profile, settings))?;
    let body = match format {
        ExportFormat::Html => html_document(title, &markdown_to_safe_html(&markdown)),
        _ => markdown,
    };

    Ok(ExportFile {
        file_name: export_file_name(&stem, format),
        content_type: format.content_type(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::templates::build_tera;
    use crate::models::BrandKit;

    fn profile() -> CandidateProfile {
        CandidateProfile {
            id: 3,
            personal_background: "Civil engineer".to_string(),
            political_history: String::new(),
            achievements: "Piped water for 4,200 homes".to_string(),
            vision: "Safe streets".to_string(),
            social_work: String::new(),
            core_positioning: "The builder who delivers".to_string(),
            party_manifesto: String::new(),
            brand_kit: BrandKit {
                fonts: vec!["Poppins".to_string(), "Mukta".to_string()],
                slogan: "Progress That Matters".to_string(),
                ..Default::default()
            },
        }
    }

    fn export(format: ExportFormat, stem: &str, content: &str) -> Result<ExportFile, HelperError> {
        build_export(&ExportRequest { format, file_stem: stem.to_string(), content: content.to_string() })
    }

    #[test]
    fn slugs_collapse_whitespace_and_lowercase() {
        assert_eq!(slugify("Ward 12   Water\tProject"), "ward-12-water-project");
        assert_eq!(slugify("speech full Town Hall"), "speech-full-town-hall");
        assert_eq!(slugify(" a/b:c "), "abc");
    }

    #[test]
    fn text_exports_keep_content_verbatim() {
        let file = export(ExportFormat::Pdf, "speech summary Press Conference", "Thank you.").unwrap();
        assert_eq!(file.file_name, "speech-summary-press-conference.pdf");
        assert_eq!(file.body, "Thank you.");
        assert!(file.content_type.starts_with("text/plain"));
    }

    #[test]
    fn html_exports_are_sanitized_documents() {
        let file = export(ExportFormat::Html, "press release", "**FOR IMMEDIATE RELEASE**<img src=x onerror=alert(1)>").unwrap();
        assert_eq!(file.file_name, "press-release.html");
        assert!(file.body.contains("<strong>FOR IMMEDIATE RELEASE</strong>"));
        assert!(!file.body.contains("onerror"));
    }

    #[test]
    fn audio_exports_need_a_data_url() {
        assert!(matches!(export(ExportFormat::Mp3, "campaign announcement", "hello"), Err(HelperError::Validation(_))));
        let file = export(ExportFormat::Mp3, "campaign announcement", "data:audio/wav;base64,UklGR...").unwrap();
        assert_eq!(file.file_name, "campaign-announcement.mp3");
    }

    #[test]
    fn empty_exports_are_rejected() {
        assert!(matches!(export(ExportFormat::Txt, "  ", "text"), Err(HelperError::Validation(_))));
        assert!(matches!(export(ExportFormat::Txt, "notes", " "), Err(HelperError::Validation(_))));
    }

    #[test]
    fn dossier_marks_blank_sections() {
        let tera = build_tera().unwrap();
        let file = render_profile_document(&tera, &CampaignSettings::default(), &profile(), ProfileDocument::Dossier, ExportFormat::Txt).unwrap();
        assert_eq!(file.file_name, "candidate-dossier-3.txt");
        assert!(file.body.starts_with("# Candidate Dossier"));
        assert!(file.body.contains("*Progress That Matters*"));
        assert!(file.body.contains("## Key Achievements\n\nPiped water for 4,200 homes"));
        assert!(file.body.contains("## Political History\n\nNot provided."));
        assert!(file.body.contains("Prepared by Campaign Hub"));
    }

    #[test]
    fn designer_brief_lists_brand_kit() {
        let tera = build_tera().unwrap();
        let file = render_profile_document(&tera, &CampaignSettings::default(), &profile(), ProfileDocument::DesignerBrief, ExportFormat::Html).unwrap();
        assert_eq!(file.file_name, "designer-brief-3.html");
        assert!(file.body.contains("<td>#1E3A8A</td>"));
        assert!(file.body.contains("<li>Poppins</li>"));
        assert!(file.body.contains("No logo uploaded"));

        let audio = render_profile_document(&tera, &CampaignSettings::default(), &profile(), ProfileDocument::DesignerBrief, ExportFormat::Wav);
        assert!(matches!(audio, Err(HelperError::Validation(_))));
    }
}
