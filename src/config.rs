use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_GENERATION_DELAY_MS: u64 = 1500;

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    // Populated from the .env file
    pub database_path: String,
    pub allowed_origins: String,
    pub log_level: String,
    pub generation_delay_ms: u64,
    pub seed_fixtures: bool,
}

/// Values read from the process environment before validation.
#[derive(Debug, Default, Clone)]
pub struct EnvValues {
    pub database_path: Option<String>,
    pub allowed_origins: Option<String>,
    pub log_level: Option<String>,
    pub generation_delay_ms: Option<String>,
    pub seed_fixtures: Option<String>,
}

/// The .env-driven part of the configuration after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvSettings {
    pub database_path: String,
    pub allowed_origins: String,
    pub log_level: String,
    pub generation_delay_ms: u64,
    pub seed_fixtures: bool,
}

impl EnvValues {
    pub fn from_process_env() -> Self {
        EnvValues {
            database_path: env::var("DATABASE_PATH").ok(),
            allowed_origins: env::var("ALLOWED_ORIGINS").ok(),
            log_level: env::var("LOG_LEVEL").ok(),
            generation_delay_ms: env::var("GENERATION_DELAY_MS").ok(),
            seed_fixtures: env::var("SEED_FIXTURES").ok(),
        }
    }

    pub fn validate(self) -> Result<EnvSettings, config::ConfigError> {
        let database_path = self.database_path.ok_or_else(|| {
            config::ConfigError::Message(
                "FATAL: Environment variable 'DATABASE_PATH' is not set in your .env file.".to_string(),
            )
        })?;

        if Path::new(&database_path).is_relative() {
            return Err(config::ConfigError::Message(format!(
                "FATAL: The 'DATABASE_PATH' in your .env file is a relative path ('{}'). It MUST be an absolute path.",
                database_path
            )));
        }

        let generation_delay_ms = match self.generation_delay_ms {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                config::ConfigError::Message(format!(
                    "FATAL: 'GENERATION_DELAY_MS' must be a whole number of milliseconds, got '{}'.",
                    raw
                ))
            })?,
            None => DEFAULT_GENERATION_DELAY_MS,
        };

        // Anything other than a valid bool counts as "don't seed".
        let seed_fixtures = self
            .seed_fixtures
            .and_then(|raw| raw.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Ok(EnvSettings {
            database_path,
            allowed_origins: self.allowed_origins.unwrap_or_default(),
            log_level: self.log_level.unwrap_or_else(|| "info".to_string()),
            generation_delay_ms,
            seed_fixtures,
        })
    }
}

impl Config {
    pub fn from_env(env_path: &Path) -> Result<Self, config::ConfigError> {
        dotenvy::from_path(env_path).map_err(|e| {
            config::ConfigError::Message(format!(
                "FATAL: Failed to load .env file from '{}'. Error: {}",
                env_path.display(),
                e
            ))
        })?;

        let settings = EnvValues::from_process_env().validate()?;

        config::Config::builder()
            // Host and port come from the TOML file.
            .add_source(config::File::new("config/default.toml", config::FileFormat::Toml))
            .set_override("database_path", settings.database_path)?
            .set_override("allowed_origins", settings.allowed_origins)?
            .set_override("log_level", settings.log_level)?
            .set_override("generation_delay_ms", settings.generation_delay_ms)?
            .set_override("seed_fixtures", settings.seed_fixtures)?
            .build()?
            .try_deserialize()
    }

    /// SQLite file holding profiles, post ideas, events and settings.
    pub fn campaign_db_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
            .join("campaign")
            .join("campaign.db")
    }

    /// Redb file holding the saved message library.
    pub fn library_db_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
            .join("library")
            .join("library.db")
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(database_path: &str) -> EnvValues {
        EnvValues {
            database_path: Some(database_path.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_apply_when_optional_values_are_missing() {
        let settings = values("/var/lib/campaign").validate().unwrap();
        assert_eq!(settings.allowed_origins, "");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.generation_delay_ms, 1500);
        assert!(!settings.seed_fixtures);
    }

    #[test]
    fn missing_or_relative_database_path_is_rejected() {
        assert!(EnvValues::default().validate().is_err());
        assert!(values("data/campaign").validate().is_err());
    }

    #[test]
    fn delay_must_be_numeric() {
        let mut raw = values("/srv/campaign");
        raw.generation_delay_ms = Some("fast".to_string());
        assert!(raw.validate().is_err());

        let mut raw = values("/srv/campaign");
        raw.generation_delay_ms = Some(" 0 ".to_string());
        assert_eq!(raw.validate().unwrap().generation_delay_ms, 0);
    }

    #[test]
    fn seed_flag_accepts_only_bools() {
        let mut raw = values("/srv/campaign");
        raw.seed_fixtures = Some("true".to_string());
        assert!(raw.validate().unwrap().seed_fixtures);

        let mut raw = values("/srv/campaign");
        raw.seed_fixtures = Some("yes".to_string());
        assert!(!raw.validate().unwrap().seed_fixtures);
    }

    #[test]
    fn database_files_live_in_their_own_folders() {
        let config = Config {
            web: WebConfig { host: "127.0.0.1".to_string(), port: 8080 },
            database_path: "/srv/campaign".to_string(),
            allowed_origins: String::new(),
            log_level: "info".to_string(),
            generation_delay_ms: 250,
            seed_fixtures: false,
        };
        assert_eq!(config.campaign_db_path(), PathBuf::from("/srv/campaign/campaign/campaign.db"));
        assert_eq!(config.library_db_path(), PathBuf::from("/srv/campaign/library/library.db"));
        assert_eq!(config.generation_delay(), Duration::from_millis(250));
    }
}
