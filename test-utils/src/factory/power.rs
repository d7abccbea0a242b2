//! Power factory for creating test catalog entries.
//!
//! This module provides factory methods for creating power definition entities
//! with sensible defaults, reducing boilerplate in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test power definitions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::power::PowerFactory;
///
/// let power = PowerFactory::new(&db)
///     .name("Founding Titan")
///     .rank("Mythic")
///     .base_cp(6_000)
///     .build()
///     .await?;
/// ```
pub struct PowerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    rank: String,
    base_cp: i64,
    base_price: i64,
}

impl<'a> PowerFactory<'a> {
    /// Creates a new PowerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Power {id}"`
    /// - description: `"Test power {id}"`
    /// - rank: `"Normal"`
    /// - base_cp: `150`
    /// - base_price: `500`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PowerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Power {}", id),
            description: format!("Test power {}", id),
            rank: "Normal".to_string(),
            base_cp: 150,
            base_price: 500,
        }
    }

    /// Sets the display name for the power.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the power.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the authored rank name for the power.
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    /// Sets the base combat power.
    pub fn base_cp(mut self, base_cp: i64) -> Self {
        self.base_cp = base_cp;
        self
    }

    /// Sets the base store price.
    pub fn base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Builds and inserts the power entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::power::Model)` - Created power entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::power::Model, DbErr> {
        entity::power::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            rank: ActiveValue::Set(self.rank),
            base_cp: ActiveValue::Set(self.base_cp),
            base_price: ActiveValue::Set(self.base_price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a power with a specific rank and base CP.
///
/// Shorthand for the common case of seeding one catalog entry.
///
/// # Arguments
/// - `db` - Database connection
/// - `rank` - Authored rank name (e.g. "Mythic")
/// - `base_cp` - Base combat power
///
/// # Returns
/// - `Ok(entity::power::Model)` - Created power entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_power(
    db: &DatabaseConnection,
    rank: impl Into<String>,
    base_cp: i64,
) -> Result<entity::power::Model, DbErr> {
    PowerFactory::new(db).rank(rank).base_cp(base_cp).build().await
}
