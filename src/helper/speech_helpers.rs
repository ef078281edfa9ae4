use crate::helper::{require, HelperError};
use crate::models::generator_models::{Speech, SpeechRequest};

pub const AUDIENCE_TYPES: [&str; 5] = [
    "Public Rally",
    "Press Conference",
    "Internal Meeting",
    "Town Hall",
    "Campaign Launch",
];

const FALLBACK_AUDIENCE: &str = "Public Rally";

struct SpeechDraft {
    audience: &'static str,
    full: &'static str,
    summary: &'static str,
    bullets: &'static str,
}

static SPEECH_DRAFTS: [SpeechDraft; 3] = [
    SpeechDraft {
        audience: "Public Rally",
        full: include_str!("../../templates/speeches/public_rally_full.txt"),
        summary: include_str!("../../templates/speeches/public_rally_summary.txt"),
        bullets: include_str!("../../templates/speeches/public_rally_bullets.txt"),
    },
    SpeechDraft {
        audience: "Press Conference",
        full: include_str!("../../templates/speeches/press_conference_full.txt"),
        summary: include_str!("../../templates/speeches/press_conference_summary.txt"),
        bullets: include_str!("../../templates/speeches/press_conference_bullets.txt"),
    },
    SpeechDraft {
        audience: "Internal Meeting",
        full: include_str!("../../templates/speeches/internal_meeting_full.txt"),
        summary: include_str!("../../templates/speeches/internal_meeting_summary.txt"),
        bullets: include_str!("../../templates/speeches/internal_meeting_bullets.txt"),
    },
];

fn draft_for(audience_type: &str) -> &'static SpeechDraft {
    SPEECH_DRAFTS
        .iter()
        .find(|draft| draft.audience == audience_type)
        .or_else(|| SPEECH_DRAFTS.iter().find(|draft| draft.audience == FALLBACK_AUDIENCE))
        .unwrap_or(&SPEECH_DRAFTS[0])
}

/// Full speech, short summary and bullet outline for an audience. Audiences
/// without their own draft get the rally speech.
pub fn generate_speech(request: &SpeechRequest) -> Result<Speech, HelperError> {
    let audience_type = request.audience_type.trim();
    require(audience_type, "Audience type")?;

    let draft = draft_for(audience_type);
    Ok(Speech {
        audience_type: audience_type.to_string(),
        full: draft.full.trim_end().to_string(),
        summary: draft.summary.trim_end().to_string(),
        bullets: draft.bullets.trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech(audience: &str) -> Result<Speech, HelperError> {
        generate_speech(&SpeechRequest { audience_type: audience.to_string() })
    }

    #[test]
    fn audience_is_required() {
        assert!(matches!(speech(""), Err(HelperError::Validation(_))));
    }

    #[test]
    fn each_drafted_audience_has_its_own_speech() {
        let press = speech("Press Conference").unwrap();
        assert!(press.full.starts_with("Good morning, and thank you for joining us today."));
        assert!(press.full.ends_with("I'll now take your questions."));
        assert!(press.bullets.starts_with("• Welcome press"));

        let internal = speech("Internal Meeting").unwrap();
        assert!(internal.summary.starts_with("Thank you all for being here."));
    }

    #[test]
    fn audiences_without_a_draft_get_the_rally_speech() {
        let rally = speech("Public Rally").unwrap();
        for audience in ["Town Hall", "Campaign Launch"] {
            let other = speech(audience).unwrap();
            assert_eq!(other.audience_type, audience);
            assert_eq!(other.full, rally.full);
            assert_eq!(other.bullets, rally.bullets);
        }
    }
}
