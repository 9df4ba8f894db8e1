use chrono::NaiveTime;
use std::env;

/// Process-wide configuration, loaded once at startup by the hosting
/// service. Site branding is presentation-only and passed through to
/// whatever admin surface sits on top of this crate.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub site_name: String,
    pub site_tagline: String,
    pub default_schedule_start: NaiveTime,
    pub default_schedule_end: NaiveTime,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://salonbook.db?mode=rwc".to_string());

        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| "Salonbook".to_string());

        let site_tagline = env::var("SITE_TAGLINE")
            .unwrap_or_else(|_| "Book your next appointment".to_string());

        let default_schedule_start = parse_time_var("DEFAULT_SCHEDULE_START", "09:00")?;
        let default_schedule_end = parse_time_var("DEFAULT_SCHEDULE_END", "18:00")?;

        if default_schedule_start >= default_schedule_end {
            return Err(ConfigError::InvalidScheduleWindow);
        }

        Ok(Config {
            database_url,
            site_name,
            site_tagline,
            default_schedule_start,
            default_schedule_end,
        })
    }
}

fn parse_time_var(name: &'static str, default: &str) -> Result<NaiveTime, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|_| ConfigError::InvalidTime(name))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not a valid HH:MM time")]
    InvalidTime(&'static str),

    #[error("DEFAULT_SCHEDULE_START must be before DEFAULT_SCHEDULE_END")]
    InvalidScheduleWindow,
}
