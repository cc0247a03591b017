use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Schedule table location when SCHEDULE_FILE is not set.
pub const DEFAULT_SCHEDULE_FILE: &str = "config/class_schedule.json";

/// Everything a sync run needs, resolved from the environment up front.
#[derive(Debug)]
pub struct Config {
    /// Timetable day-order endpoint
    pub api_url: String,

    /// Target Google calendar id
    pub calendar_id: String,

    /// Service-account key JSON (the file contents, not a path)
    pub credentials: String,

    /// Path to the class schedule table
    pub schedule_file: PathBuf,
}

/// Load the full sync configuration from environment variables.
pub fn load_config() -> Result<Config> {
    let api_url = api_url()?;

    let Some(calendar_id) = env_var("CALENDAR_ID") else {
        anyhow::bail!(
            "CALENDAR_ID environment variable is not set\n\n\
            Use the target calendar's id from its Google Calendar settings page:\n\n\
            export CALENDAR_ID=\"abc123@group.calendar.google.com\""
        );
    };

    let credentials = match env_var("GOOGLE_CREDENTIALS") {
        Some(json) => json,
        None => match env_var("GOOGLE_CREDENTIALS_FILE") {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read credentials file at {}", path))?,
            None => anyhow::bail!(
                "Google credentials are not configured\n\n\
                Provide a service-account key, inline or as a file:\n\n\
                export GOOGLE_CREDENTIALS='{{ ...service-account json... }}'\n\
                export GOOGLE_CREDENTIALS_FILE=/path/to/service-account.json\n\n\
                The service account must have write access to the calendar."
            ),
        },
    };

    Ok(Config {
        api_url,
        calendar_id,
        credentials,
        schedule_file: schedule_file(),
    })
}

/// Where the class schedule table lives (SCHEDULE_FILE or the default).
fn schedule_file() -> PathBuf {
    env_var("SCHEDULE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEDULE_FILE))
}

/// The timetable endpoint alone, for commands that never touch the calendar.
pub fn api_url() -> Result<String> {
    match env_var("API_URL") {
        Some(url) => Ok(url),
        None => anyhow::bail!(
            "API_URL environment variable is not set\n\n\
            Point it at the timetable day-order endpoint:\n\n\
            export API_URL=\"https://academia.example.edu/api/dayorder\""
        ),
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
