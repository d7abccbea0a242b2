//! Owned-power factory for creating test power instances.
//!
//! This module provides factory methods for creating owned power instances that
//! reference an existing user and catalog entry.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating owned power instances with customizable fields.
///
/// The referenced user and power must already exist; use the `user` and `power`
/// factories to create them first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_power::UserPowerFactory;
///
/// let owned = UserPowerFactory::new(&db, user.discord_id, power.id)
///     .combat_power(5_800)
///     .build()
///     .await?;
/// ```
pub struct UserPowerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    power_id: i64,
    combat_power: i64,
}

impl<'a> UserPowerFactory<'a> {
    /// Creates a new UserPowerFactory for the given owner and catalog entry.
    ///
    /// Defaults:
    /// - combat_power: `150`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord ID of the owning user
    /// - `power_id` - Catalog id of the power definition
    ///
    /// # Returns
    /// - `UserPowerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i64, power_id: i64) -> Self {
        Self {
            db,
            user_id,
            power_id,
            combat_power: 150,
        }
    }

    /// Sets the instance's randomized combat power.
    pub fn combat_power(mut self, combat_power: i64) -> Self {
        self.combat_power = combat_power;
        self
    }

    /// Builds and inserts the owned power into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_power::Model)` - Created owned power entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_power::Model, DbErr> {
        entity::user_power::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            power_id: ActiveValue::Set(self.power_id),
            combat_power: ActiveValue::Set(self.combat_power),
            obtained_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an owned power with a specific combat power.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user
/// - `power_id` - Catalog id of the power definition
/// - `combat_power` - Randomized CP for the instance
///
/// # Returns
/// - `Ok(entity::user_power::Model)` - Created owned power entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_power(
    db: &DatabaseConnection,
    user_id: i64,
    power_id: i64,
    combat_power: i64,
) -> Result<entity::user_power::Model, DbErr> {
    UserPowerFactory::new(db, user_id, power_id)
        .combat_power(combat_power)
        .build()
        .await
}
