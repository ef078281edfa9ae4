use crate::config::Config;
use crate::helper::{
    message_templates, press_helpers, script_helpers, settings_helpers, slogan_helpers, speech_helpers,
};
use crate::models::generator_models::{
    GeneratorOptions, PressReleaseRequest, SloganRequest, SpeechRequest, VoiceAudioRequest, VoiceScriptRequest,
    WhatsAppRequest,
};
use crate::routes::{failure, ok, simulate_generation};
use crate::AppState;
use actix_web::{web, Responder};
use chrono::Utc;
use tera::Tera;

pub fn config_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/generate")
            .route("/options", web::get().to(get_options))
            .route("/whatsapp", web::post().to(generate_whatsapp))
            .route("/voice-script", web::post().to(generate_voice_script))
            .route("/voice-audio", web::post().to(generate_voice_audio))
            .route("/press-release", web::post().to(generate_press_release))
            .route("/speech", web::post().to(generate_speech))
            .route("/slogans", web::post().to(generate_slogans))
            .route("/audio-announcement", web::post().to(generate_audio_announcement)),
    );
}

async fn get_options() -> impl Responder {
    ok(GeneratorOptions {
        occasions: message_templates::OCCASIONS.to_vec(),
        languages: message_templates::LANGUAGES.to_vec(),
        tones: message_templates::TONES.to_vec(),
        voice_objectives: script_helpers::VOICE_OBJECTIVES.to_vec(),
        voice_types: script_helpers::VOICE_TYPES.to_vec(),
        speech_speeds: script_helpers::SPEECH_SPEEDS.to_vec(),
        audio_qualities: script_helpers::AUDIO_QUALITIES.to_vec(),
        audience_types: speech_helpers::AUDIENCE_TYPES.to_vec(),
    })
}

async fn generate_whatsapp(config: web::Data<Config>, payload: web::Json<WhatsAppRequest>) -> impl Responder {
    simulate_generation(&config).await;
    match message_templates::generate_whatsapp(&payload) {
        Ok(messages) => ok(messages),
        Err(e) => failure("Failed to generate message", e),
    }
}

async fn generate_voice_script(config: web::Data<Config>, payload: web::Json<VoiceScriptRequest>) -> impl Responder {
    simulate_generation(&config).await;
    match script_helpers::generate_voice_script(&payload) {
        Ok(script) => ok(script),
        Err(e) => failure("Failed to generate content", e),
    }
}

async fn generate_voice_audio(config: web::Data<Config>, payload: web::Json<VoiceAudioRequest>) -> impl Responder {
    simulate_generation(&config).await;
    match script_helpers::simulate_voice_audio(&payload, Utc::now().timestamp_millis()) {
        Ok(audio) => ok(audio),
        Err(e) => failure("Failed to generate audio", e),
    }
}

async fn generate_press_release(
    config: web::Data<Config>,
    state: web::Data<AppState>,
    tera: web::Data<Tera>,
    payload: web::Json<PressReleaseRequest>,
) -> impl Responder {
    simulate_generation(&config).await;
    let settings = settings_helpers::current_settings(&state);
    match press_helpers::generate_press_release(&tera, &settings, &payload) {
        Ok(release) => ok(release),
        Err(e) => failure("Failed to generate press release", e),
    }
}

async fn generate_speech(config: web::Data<Config>, payload: web::Json<SpeechRequest>) -> impl Responder {
    simulate_generation(&config).await;
    match speech_helpers::generate_speech(&payload) {
        Ok(speech) => ok(speech),
        Err(e) => failure("Failed to generate speech", e),
    }
}

async fn generate_slogans(config: web::Data<Config>, payload: web::Json<SloganRequest>) -> impl Responder {
    simulate_generation(&config).await;
    match slogan_helpers::generate_slogans(&payload, &mut rand::thread_rng()) {
        Ok(slogans) => ok(slogans),
        Err(e) => failure("Failed to generate slogans", e),
    }
}

async fn generate_audio_announcement(
    config: web::Data<Config>,
    state: web::Data<AppState>,
    tera: web::Data<Tera>,
) -> impl Responder {
    simulate_generation(&config).await;
    let settings = settings_helpers::current_settings(&state);
    match script_helpers::generate_audio_announcement(&tera, &settings) {
        Ok(announcement) => ok(announcement),
        Err(e) => failure("Failed to generate script and audio", e),
    }
}
