use serde::Deserialize;

/// Settings for the outbound notification publisher.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub notifier: NotifierConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let notifier = NotifierConfig {
            endpoint: std::env::var("NOTIFY_ENDPOINT")?,
            timeout_secs: std::env::var("NOTIFY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5),
        };
        Ok(Self {
            database_url,
            notifier,
        })
    }
}
