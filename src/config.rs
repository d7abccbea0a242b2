use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_token: String,

    /// Optional path to a JSON rank table overriding the built-in one.
    pub rank_table_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            rank_table_path: std::env::var("RANK_TABLE_PATH").ok(),
        })
    }
}
