use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1E3A8A";
pub const DEFAULT_SECONDARY_COLOR: &str = "#DC2626";
pub const DEFAULT_ACCENT_COLOR: &str = "#F59E0B";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BrandKit {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub logo: Option<String>,
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub slogan: String,
}

impl Default for BrandKit {
    fn default() -> Self {
        BrandKit {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            logo: None,
            fonts: Vec::new(),
            slogan: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CandidateProfile {
    pub id: i64,
    pub personal_background: String,
    pub political_history: String,
    pub achievements: String,
    pub vision: String,
    pub social_work: String,
    pub core_positioning: String,
    pub party_manifesto: String,
    pub brand_kit: BrandKit,
}

/// Body of a profile create request. Every narrative field may be left blank.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct NewCandidateProfile {
    pub personal_background: String,
    pub political_history: String,
    pub achievements: String,
    pub vision: String,
    pub social_work: String,
    pub core_positioning: String,
    pub party_manifesto: String,
    pub brand_kit: BrandKit,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BrandKitPatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub logo: Option<String>,
    pub fonts: Option<Vec<String>>,
    pub slogan: Option<String>,
}

/// Partial profile update. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CandidateProfilePatch {
    pub personal_background: Option<String>,
    pub political_history: Option<String>,
    pub achievements: Option<String>,
    pub vision: Option<String>,
    pub social_work: Option<String>,
    pub core_positioning: Option<String>,
    pub party_manifesto: Option<String>,
    pub brand_kit: Option<BrandKitPatch>,
}

impl CandidateProfile {
    pub fn apply(&mut self, patch: CandidateProfilePatch) {
        if let Some(v) = patch.personal_background { self.personal_background = v; }
        if let Some(v) = patch.political_history { self.political_history = v; }
        if let Some(v) = patch.achievements { self.achievements = v; }
        if let Some(v) = patch.vision { self.vision = v; }
        if let Some(v) = patch.social_work { self.social_work = v; }
        if let Some(v) = patch.core_positioning { self.core_positioning = v; }
        if let Some(v) = patch.party_manifesto { self.party_manifesto = v; }
        if let Some(kit) = patch.brand_kit {
            let brand = &mut self.brand_kit;
            if let Some(v) = kit.primary_color { brand.primary_color = v; }
            if let Some(v) = kit.secondary_color { brand.secondary_color = v; }
            if let Some(v) = kit.accent_color { brand.accent_color = v; }
            if let Some(v) = kit.logo { brand.logo = Some(v).filter(|s| !s.is_empty()); }
            if let Some(v) = kit.fonts { brand.fonts = v; }
            if let Some(v) = kit.slogan { brand.slogan = v; }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Image,
    Video,
    Text,
    Audio,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStatus {
    Idea,
    Draft,
    Ready,
    Published,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Image => "Image",
            ContentType::Video => "Video",
            ContentType::Text => "Text",
            ContentType::Audio => "Audio",
        }
    }
}

impl FromStr for ContentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Image" => Ok(ContentType::Image),
            "Video" => Ok(ContentType::Video),
            "Text" => Ok(ContentType::Text),
            "Audio" => Ok(ContentType::Audio),
            other => Err(ParseEnumError { kind: "content type", value: other.to_string() }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Idea => "Idea",
            PostStatus::Draft => "Draft",
            PostStatus::Ready => "Ready",
            PostStatus::Published => "Published",
        }
    }
}

impl FromStr for PostStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idea" => Ok(PostStatus::Idea),
            "Draft" => Ok(PostStatus::Draft),
            "Ready" => Ok(PostStatus::Ready),
            "Published" => Ok(PostStatus::Published),
            other => Err(ParseEnumError { kind: "post status", value: other.to_string() }),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostIdea {
    pub id: i64,
    pub brief: String,
    pub content_type: ContentType,
    pub theme_tags: Vec<String>,
    pub status: PostStatus,
    pub post_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewPostIdea {
    pub brief: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub theme_tags: Vec<String>,
    #[serde(default = "default_post_status")]
    pub status: PostStatus,
    pub post_date: NaiveDate,
}

fn default_post_status() -> PostStatus {
    PostStatus::Idea
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PostIdeaPatch {
    pub brief: Option<String>,
    pub content_type: Option<ContentType>,
    pub theme_tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub post_date: Option<NaiveDate>,
}

impl PostIdea {
    pub fn apply(&mut self, patch: PostIdeaPatch) {
        if let Some(v) = patch.brief { self.brief = v; }
        if let Some(v) = patch.content_type { self.content_type = v; }
        if let Some(v) = patch.theme_tags { self.theme_tags = v; }
        if let Some(v) = patch.status { self.status = v; }
        if let Some(v) = patch.post_date { self.post_date = v; }
    }
}

/// Equality and range filters accepted by the post idea listing.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PostIdeaFilter {
    pub status: Option<PostStatus>,
    pub content_type: Option<ContentType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventCalendarEntry {
    pub id: i64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewEventCalendarEntry {
    pub event_name: String,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EventCalendarEntryPatch {
    pub event_name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EventCalendarEntry {
    pub fn apply(&mut self, patch: EventCalendarEntryPatch) {
        if let Some(v) = patch.event_name { self.event_name = v; }
        if let Some(v) = patch.event_date { self.event_date = v; }
        if let Some(v) = patch.location { self.location = v; }
        if let Some(v) = patch.description { self.description = v; }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LibraryMessage {
    pub id: u64,
    pub message_text: String,
    pub occasion: String,
    pub language: String,
    pub tone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewLibraryMessage {
    pub message_text: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub tone: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LibraryMessagePatch {
    pub message_text: Option<String>,
    pub occasion: Option<String>,
    pub language: Option<String>,
    pub tone: Option<String>,
}

impl LibraryMessage {
    pub fn apply(&mut self, patch: LibraryMessagePatch) {
        if let Some(v) = patch.message_text { self.message_text = v; }
        if let Some(v) = patch.occasion { self.occasion = v; }
        if let Some(v) = patch.language { self.language = v; }
        if let Some(v) = patch.tone { self.tone = v; }
    }
}

/// Campaign-wide values that feed generated copy (contact block, disclaimers).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CampaignSettings {
    pub campaign_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub website: String,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        CampaignSettings {
            campaign_name: "Campaign Hub".to_string(),
            contact_phone: "(555) 123-4567".to_string(),
            contact_email: "info@campaignhub.com".to_string(),
            website: "www.campaignhub.com".to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub ideas: Vec<PostIdea>,
}

/// One month of the planner, every day present even when nothing is scheduled.
#[derive(Serialize, Debug)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub total_ideas: usize,
    pub days: Vec<CalendarDay>,
}

#[derive(Serialize)]
pub struct DashboardStats {
    pub total_ideas: usize,
    pub draft_ideas: usize,
    pub upcoming_events: usize,
    pub saved_messages: usize,
}

#[derive(Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_ideas: Vec<PostIdea>,
    pub upcoming_events: Vec<EventCalendarEntry>,
    pub profile: Option<CandidateProfile>,
}

pub mod db_operations;
pub mod generator_models;
