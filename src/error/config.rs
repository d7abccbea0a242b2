use thiserror::Error;

/// Errors raised while loading application configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The configured rank table file could not be read.
    #[error("Failed to read rank table file '{path}': {source}")]
    RankTableIo {
        /// Path that was configured via RANK_TABLE_PATH
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
