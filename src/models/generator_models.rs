use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- WhatsApp ---

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct WhatsAppRequest {
    pub occasion: String,
    pub language: String,
    pub tone: String,
    pub voter_name: Option<String>,
    /// Free text received from a voter. When present the reply is chosen by keyword.
    pub voter_message: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct WhatsAppMessages {
    pub short: String,
    pub long: String,
}

// --- Voice / IVR ---

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct VoiceScriptRequest {
    pub objective: String,
    pub user_input: String,
    pub voice_type: String,
}

#[derive(Serialize)]
pub struct VoiceScript {
    pub script: String,
    pub from_user_input: bool,
}

#[derive(Deserialize)]
pub struct VoiceAudioRequest {
    pub script: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: String,
    #[serde(default = "default_quality")]
    pub quality: String,
}

fn default_voice() -> String { "professional".to_string() }
fn default_speed() -> String { "normal".to_string() }
fn default_quality() -> String { "standard".to_string() }

#[derive(Serialize, Debug)]
pub struct SimulatedAudio {
    pub audio_url: String,
    pub file_name: String,
    pub voice: String,
    pub speed: String,
    pub quality: String,
    pub estimated_duration_ms: u64,
}

// --- Press release ---

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PressReleaseRequest {
    pub event_name: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub key_quotes: String,
    pub impact_statistics: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct PressRelease {
    pub text: String,
    pub export_file_name: String,
}

// --- Speech ---

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SpeechRequest {
    pub audience_type: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Speech {
    pub audience_type: String,
    pub full: String,
    pub summary: String,
    pub bullets: String,
}

// --- Slogans ---

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SloganRequest {
    pub core_message: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SloganTone {
    Emotional,
    Authoritative,
    Inspirational,
}

#[derive(Serialize, Debug)]
pub struct Slogan {
    pub id: String,
    pub text: String,
    pub tone: SloganTone,
}

// --- Audio announcement ---

#[derive(Serialize)]
pub struct AudioAnnouncement {
    pub script: String,
    pub audio_url: String,
    pub file_name: String,
}

// --- Export ---

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Doc,
    Pdf,
    Txt,
    Html,
    Mp3,
    Wav,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Doc => "doc",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Mp3 => "mp3",
            ExportFormat::Wav => "wav",
        }
    }

    /// Documents are plain text whatever their label; audio exports carry a data URL.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            _ => "text/plain; charset=utf-8",
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, ExportFormat::Mp3 | ExportFormat::Wav)
    }
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Base name before slugging, e.g. "press release Town Hall".
    pub file_stem: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct GeneratorOptions {
    pub occasions: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub tones: Vec<&'static str>,
    pub voice_objectives: Vec<&'static str>,
    pub voice_types: Vec<&'static str>,
    pub speech_speeds: Vec<&'static str>,
    pub audio_qualities: Vec<&'static str>,
    pub audience_types: Vec<&'static str>,
}
