use tera::Tera;

pub const PRESS_RELEASE: &str = "press_release.txt";
pub const AUDIO_ANNOUNCEMENT: &str = "audio_announcement.txt";
pub const PROFILE_DOSSIER: &str = "profile_dossier.md";
pub const DESIGNER_BRIEF: &str = "designer_brief.md";

/// Builds the Tera instance shared by all workers. Templates are compiled into
/// the binary so the server does not depend on its working directory.
pub fn build_tera() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (PRESS_RELEASE, include_str!("../../templates/generators/press_release.txt")),
        (AUDIO_ANNOUNCEMENT, include_str!("../../templates/generators/audio_announcement.txt")),
        (PROFILE_DOSSIER, include_str!("../../templates/exports/profile_dossier.md")),
        (DESIGNER_BRIEF, include_str!("../../templates/exports/designer_brief.md")),
    ])?;
    Ok(tera)
}
