use crate::helper::templates::AUDIO_ANNOUNCEMENT;
use crate::helper::HelperError;
use crate::models::generator_models::{AudioAnnouncement, SimulatedAudio, VoiceAudioRequest, VoiceScript, VoiceScriptRequest};
use crate::models::CampaignSettings;
use tera::{Context, Tera};

pub const VOICE_OBJECTIVES: [&str; 6] = [
    "Voter Registration",
    "Event Reminder",
    "Get Out The Vote",
    "Press Release",
    "Campaign Speech",
    "Social Media Post",
];
pub const VOICE_TYPES: [&str; 4] = ["professional", "authoritative", "friendly", "inspirational"];
pub const SPEECH_SPEEDS: [&str; 3] = ["slow", "normal", "fast"];
pub const AUDIO_QUALITIES: [&str; 3] = ["standard", "high", "premium"];

/// Stand-in for synthesized speech: a truncated WAV header in a data URL.
const PLACEHOLDER_WAV_URL: &str = "data:audio/wav;base64,UklGRnoGAABXQVZFZm10IBAAAAABAAECAPA...";
const ANNOUNCEMENT_AUDIO_URL: &str = "data:audio/wav;base64,UklGRnoGAABXQVZFZm10IBAAAAABA...";
const ANNOUNCEMENT_FILE_NAME: &str = "campaign-announcement.mp3";

const UNKNOWN_OBJECTIVE_SCRIPT: &str = "Generated content based on your requirements.";

const VOTER_REGISTRATION_SCRIPTS: [(&str, &str); 4] = [
    ("professional", include_str!("../../templates/scripts/voter_registration_professional.txt")),
    ("authoritative", include_str!("../../templates/scripts/voter_registration_authoritative.txt")),
    ("friendly", include_str!("../../templates/scripts/voter_registration_friendly.txt")),
    ("inspirational", include_str!("../../templates/scripts/voter_registration_inspirational.txt")),
];

const FIXED_SCRIPTS: [(&str, &str); 5] = [
    ("Event Reminder", include_str!("../../templates/scripts/event_reminder.txt")),
    ("Get Out The Vote", include_str!("../../templates/scripts/get_out_the_vote.txt")),
    ("Press Release", include_str!("../../templates/scripts/press_release.txt")),
    ("Campaign Speech", include_str!("../../templates/scripts/campaign_speech.txt")),
    ("Social Media Post", include_str!("../../templates/scripts/social_media_post.txt")),
];

/// Stock script for an objective. Voter registration varies by voice type
/// and falls back to the professional read.
pub fn objective_script(objective: &str, voice_type: &str) -> &'static str {
    if objective == "Voter Registration" {
        let pick = |voice: &str| {
            VOTER_REGISTRATION_SCRIPTS
                .iter()
                .find(|(v, _)| *v == voice)
                .map(|(_, script)| *script)
        };
        return pick(voice_type)
            .or_else(|| pick("professional"))
            .unwrap_or(UNKNOWN_OBJECTIVE_SCRIPT)
            .trim_end();
    }

    FIXED_SCRIPTS
        .iter()
        .find(|(o, _)| *o == objective)
        .map(|&(_, script)| script.trim_end())
        .unwrap_or(UNKNOWN_OBJECTIVE_SCRIPT)
}

fn objective_call_to_action(objective: &str) -> &'static str {
    match objective {
        "Voter Registration" => "Every voice matters. Register to vote and make your voice heard.",
        "Event Reminder" => "Join us as we discuss the issues that matter most to our community.",
        "Get Out The Vote" => "Your vote is your voice in democracy. Exercise this fundamental right.",
        _ => "Let's work together to create positive change for everyone.",
    }
}

const INPUT_SCRIPT_FOOTER: &str = "[Generated by AI based on your voice input and campaign objectives]";

/// Builds a script around what the user typed or dictated.
/// The `community` and `change` keywords match in any letter case.
pub fn compose_from_input(user_input: &str, objective: &str) -> String {
    let lowered = user_input.to_lowercase();
    let opening = if lowered.contains("community") {
        "Our community stands at a crossroads."
    } else {
        "We face important decisions ahead."
    };
    let belief = if lowered.contains("change") {
        "Change is not just possible - it's necessary."
    } else {
        "Together, we can build a brighter future."
    };

    format!(
        "Dear fellow citizens,\n\n{}\n\n{}\n\nBased on your voice: \"{}\"\n\n{}\n\nThank you for your engagement and participation.\n\n{}",
        opening,
        belief,
        user_input,
        objective_call_to_action(objective),
        INPUT_SCRIPT_FOOTER
    )
}

pub fn generate_voice_script(request: &VoiceScriptRequest) -> Result<VoiceScript, HelperError> {
    let objective = request.objective.trim();
    let user_input = request.user_input.trim();

    if objective.is_empty() && user_input.is_empty() {
        return Err(HelperError::validation(
            "Please select a campaign objective or provide voice/text input",
        ));
    }

    if user_input.is_empty() {
        Ok(VoiceScript {
            script: objective_script(objective, request.voice_type.trim()).to_string(),
            from_user_input: false,
        })
    } else {
        Ok(VoiceScript {
            script: compose_from_input(user_input, objective),
            from_user_input: true,
        })
    }
}

/// Roughly one second per hundred characters, never under two seconds.
pub fn estimated_duration_ms(script: &str) -> u64 {
    let chars = script.chars().count() as u64;
    ((chars + 99) / 100 * 1000).max(2000)
}

fn check_option(label: &str, value: &str, allowed: &[&str]) -> Result<(), HelperError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(HelperError::validation(format!(
            "Unknown {} '{}'. Expected one of: {}",
            label,
            value,
            allowed.join(", ")
        )))
    }
}

pub fn simulate_voice_audio(request: &VoiceAudioRequest, now_millis: i64) -> Result<SimulatedAudio, HelperError> {
    if request.script.trim().is_empty() {
        return Err(HelperError::validation("Please generate or enter a script first"));
    }
    check_option("voice", &request.voice, &VOICE_TYPES)?;
    check_option("speed", &request.speed, &SPEECH_SPEEDS)?;
    check_option("quality", &request.quality, &AUDIO_QUALITIES)?;

    Ok(SimulatedAudio {
        audio_url: format!("{}{}", PLACEHOLDER_WAV_URL, now_millis),
        file_name: format!("campaign-audio-{}.wav", now_millis),
        voice: request.voice.clone(),
        speed: request.speed.clone(),
        quality: request.quality.clone(),
        estimated_duration_ms: estimated_duration_ms(&request.script),
    })
}

/// Loudspeaker script closing with the campaign's paid-for line.
pub fn generate_audio_announcement(tera: &Tera, settings: &CampaignSettings) -> Result<AudioAnnouncement, HelperError> {
    let mut ctx = Context::new();
    ctx.insert("campaign_name", &settings.campaign_name);
    let script = tera.render(AUDIO_ANNOUNCEMENT, &ctx)?;

    Ok(AudioAnnouncement {
        script: script.trim_end().to_string(),
        audio_url: ANNOUNCEMENT_AUDIO_URL.to_string(),
        file_name: ANNOUNCEMENT_FILE_NAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::templates::build_tera;

    fn request(objective: &str, user_input: &str, voice_type: &str) -> VoiceScriptRequest {
        VoiceScriptRequest {
            objective: objective.to_string(),
            user_input: user_input.to_string(),
            voice_type: voice_type.to_string(),
        }
    }

    #[test]
    fn objective_or_input_is_required() {
        assert!(matches!(generate_voice_script(&request(" ", "", "friendly")), Err(HelperError::Validation(_))));
    }

    #[test]
    fn voter_registration_varies_by_voice() {
        let friendly = generate_voice_script(&request("Voter Registration", "", "friendly")).unwrap();
        assert!(friendly.script.starts_with("Hi there!"));
        assert!(!friendly.from_user_input);

        let fallback = objective_script("Voter Registration", "robotic");
        assert_eq!(fallback, objective_script("Voter Registration", "professional"));
        assert!(fallback.starts_with("Hello, this is an important message"));
    }

    #[test]
    fn fixed_and_unknown_objectives() {
        assert!(objective_script("Get Out The Vote", "friendly").starts_with("Election Day is here!"));
        assert_eq!(objective_script("Fundraiser", "friendly"), UNKNOWN_OBJECTIVE_SCRIPT);
    }

    #[test]
    fn input_scripts_react_to_keywords() {
        let script = generate_voice_script(&request("Get Out The Vote", "Our Community wants change", "friendly")).unwrap();
        assert!(script.from_user_input);
        assert!(script.script.contains("Our community stands at a crossroads."));
        assert!(script.script.contains("Change is not just possible"));
        assert!(script.script.contains("Based on your voice: \"Our Community wants change\""));
        assert!(script.script.contains("Exercise this fundamental right."));

        let plain = compose_from_input("roads and schools", "");
        assert!(plain.contains("We face important decisions ahead."));
        assert!(plain.contains("Together, we can build a brighter future."));
        assert!(plain.contains("Let's work together"));
    }

    #[test]
    fn input_script_keywords_ignore_case_and_end_with_footer() {
        let shouted = compose_from_input("COMMUNITY needs CHANGE", "Voter Registration");
        assert!(shouted.contains("Our community stands at a crossroads."));
        assert!(shouted.contains("Change is not just possible"));
        assert!(shouted.ends_with("Thank you for your engagement and participation.\n\n[Generated by AI based on your voice input and campaign objectives]"));
    }

    #[test]
    fn duration_estimate_has_a_floor() {
        assert_eq!(estimated_duration_ms("short"), 2000);
        assert_eq!(estimated_duration_ms(&"x".repeat(250)), 3000);
        assert_eq!(estimated_duration_ms(&"x".repeat(300)), 3000);
    }

    #[test]
    fn simulated_audio_checks_settings() {
        let ok = VoiceAudioRequest {
            script: "Vote on Tuesday".to_string(),
            voice: "friendly".to_string(),
            speed: "fast".to_string(),
            quality: "premium".to_string(),
        };
        let audio = simulate_voice_audio(&ok, 1_760_000_000_000).unwrap();
        assert!(audio.audio_url.starts_with("data:audio/wav;base64,"));
        assert!(audio.audio_url.ends_with("1760000000000"));
        assert_eq!(audio.file_name, "campaign-audio-1760000000000.wav");

        let bad = VoiceAudioRequest { quality: "lossless".to_string(), ..ok };
        assert!(matches!(simulate_voice_audio(&bad, 0), Err(HelperError::Validation(_))));
    }

    #[test]
    fn announcement_names_the_campaign() {
        let tera = build_tera().unwrap();
        let settings = CampaignSettings { campaign_name: "Team Patil".to_string(), ..Default::default() };
        let announcement = generate_audio_announcement(&tera, &settings).unwrap();
        assert!(announcement.script.ends_with("This message was paid for by Team Patil."));
        assert_eq!(announcement.file_name, "campaign-announcement.mp3");
    }
}
