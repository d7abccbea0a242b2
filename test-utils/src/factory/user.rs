//! User factory for creating test user profiles.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user profile entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id(123456789)
///     .coins(100_000)
///     .pity_counter(99)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: i64,
    name: String,
    coins: i64,
    bank_balance: i64,
    gacha_draws: i64,
    pity_counter: i32,
    equipped_power_id: Option<i64>,
    arena_rank: i64,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented unique id
    /// - name: `"Scout {id}"`
    /// - coins: `1000`
    /// - bank_balance: `0`
    /// - gacha_draws: `5`
    /// - pity_counter: `0`
    /// - equipped_power_id: `None`
    /// - arena_rank: auto-incremented (same id)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i64;
        Self {
            db,
            discord_id: id,
            name: format!("Scout {}", id),
            coins: 1_000,
            bank_balance: 0,
            gacha_draws: 5,
            pity_counter: 0,
            equipped_power_id: None,
            arena_rank: id,
        }
    }

    /// Sets the Discord ID for the user.
    pub fn discord_id(mut self, discord_id: i64) -> Self {
        self.discord_id = discord_id;
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the wallet coin balance.
    pub fn coins(mut self, coins: i64) -> Self {
        self.coins = coins;
        self
    }

    /// Sets the bank balance.
    pub fn bank_balance(mut self, bank_balance: i64) -> Self {
        self.bank_balance = bank_balance;
        self
    }

    /// Sets the gacha draw balance.
    pub fn gacha_draws(mut self, gacha_draws: i64) -> Self {
        self.gacha_draws = gacha_draws;
        self
    }

    /// Sets the pity counter.
    pub fn pity_counter(mut self, pity_counter: i32) -> Self {
        self.pity_counter = pity_counter;
        self
    }

    /// Sets the equipped owned-power id.
    pub fn equipped_power_id(mut self, equipped_power_id: Option<i64>) -> Self {
        self.equipped_power_id = equipped_power_id;
        self
    }

    /// Sets the arena ladder rank.
    pub fn arena_rank(mut self, arena_rank: i64) -> Self {
        self.arena_rank = arena_rank;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            coins: ActiveValue::Set(self.coins),
            bank_balance: ActiveValue::Set(self.bank_balance),
            gacha_draws: ActiveValue::Set(self.gacha_draws),
            pity_counter: ActiveValue::Set(self.pity_counter),
            equipped_power_id: ActiveValue::Set(self.equipped_power_id),
            arena_rank: ActiveValue::Set(self.arena_rank),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific Discord ID.
///
/// Shorthand for `UserFactory::new(db).discord_id(discord_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `discord_id` - Discord ID of the user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    discord_id: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).discord_id(discord_id).build().await
}
