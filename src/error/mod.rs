//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors via `#[from]`
//! conversions. Presentation-layer collaborators (command handlers) are responsible
//! for translating these into user-facing messages.

pub mod config;
pub mod economy;
pub mod gacha;

use thiserror::Error;

use crate::error::{config::ConfigError, economy::EconomyError, gacha::GachaError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. Domain errors
/// (`GachaError`, `EconomyError`) carry enough detail for callers to render
/// precise messages (shortfall amounts in particular), while infrastructure
/// errors are opaque and only suitable for logging.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Draw pipeline error: bad catalog configuration or exhausted draw balance.
    #[error(transparent)]
    GachaErr(#[from] GachaError),

    /// Economy error: invalid amounts, insufficient funds, unowned powers.
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Database operation error from SeaORM.
    ///
    /// A `DbErr` surfacing mid-transaction means the transaction was dropped
    /// and every mutation inside it rolled back.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
