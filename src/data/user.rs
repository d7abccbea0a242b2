//! User profile data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user profile records. All
//! balance-affecting writes are single-statement conditional updates: they filter on
//! the precondition (enough draws, enough coins) and report through the affected row
//! count whether the mutation happened. Callers run these inside a keyed-lock +
//! transaction scope; the conditional form is defense in depth on top of that lock.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter,
};

use crate::model::user::{Profile, RegisterProfileParam};

/// Repository providing database operations for user profile management.
///
/// This struct holds a reference to a connection (pool or open transaction) and
/// provides methods for creating, reading, and mutating profile records.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a profile by Discord ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found with full data
    /// - `Ok(None)` - No profile exists for that Discord ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Creates a new profile with its registration grants.
    ///
    /// # Arguments
    /// - `param` - Registration parameters: id, name, starting coins/draws/rank
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile
    /// - `Err(DbErr)` - Database error during insert (including a duplicate id)
    pub async fn create(&self, param: RegisterProfileParam) -> Result<Profile, DbErr> {
        let entity = entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id as i64),
            name: ActiveValue::Set(param.name),
            coins: ActiveValue::Set(param.coins),
            bank_balance: ActiveValue::Set(0),
            gacha_draws: ActiveValue::Set(param.gacha_draws),
            pity_counter: ActiveValue::Set(0),
            equipped_power_id: ActiveValue::Set(None),
            arena_rank: ActiveValue::Set(param.arena_rank),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Counts all registered profiles.
    ///
    /// Used to assign a new user's initial arena ladder position.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of profiles
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Atomically decrements the draw balance if it covers `count`.
    ///
    /// Single conditional UPDATE guarded on `gacha_draws >= count`. Exactly one
    /// affected row means the deduction happened; zero means the balance was
    /// drained between the caller's read and this statement.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `count` - Number of draws to deduct
    ///
    /// # Returns
    /// - `Ok(true)` - Balance was sufficient and has been deducted
    /// - `Ok(false)` - Balance was insufficient; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_decrement_draws(&self, user_id: u64, count: u32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .filter(entity::user::Column::GachaDraws.gte(i64::from(count)))
            .col_expr(
                entity::user::Column::GachaDraws,
                Expr::col(entity::user::Column::GachaDraws).sub(i64::from(count)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds draws to the user's balance.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Number of draws to add (must be positive; validated by callers)
    ///
    /// # Returns
    /// - `Ok(())` - Balance updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_draws(&self, user_id: u64, amount: i64) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .col_expr(
                entity::user::Column::GachaDraws,
                Expr::col(entity::user::Column::GachaDraws).add(amount),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Atomically spends wallet coins if the balance covers `cost`.
    ///
    /// Single conditional UPDATE guarded on `coins >= cost`.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `cost` - Coins to deduct
    ///
    /// # Returns
    /// - `Ok(true)` - Coins were sufficient and have been deducted
    /// - `Ok(false)` - Coins were insufficient; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_spend_coins(&self, user_id: u64, cost: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .filter(entity::user::Column::Coins.gte(cost))
            .col_expr(
                entity::user::Column::Coins,
                Expr::col(entity::user::Column::Coins).sub(cost),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Adds coins to the user's wallet.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Coins to add (must be positive; validated by callers)
    ///
    /// # Returns
    /// - `Ok(())` - Wallet updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_coins(&self, user_id: u64, amount: i64) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .col_expr(
                entity::user::Column::Coins,
                Expr::col(entity::user::Column::Coins).add(amount),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Atomically moves coins from wallet to bank if the wallet covers `amount`.
    ///
    /// Both columns change in one conditional UPDATE, so no interleaving can
    /// observe the coins in neither place.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Coins to deposit
    ///
    /// # Returns
    /// - `Ok(true)` - Deposit happened
    /// - `Ok(false)` - Wallet was insufficient; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_deposit_bank(&self, user_id: u64, amount: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .filter(entity::user::Column::Coins.gte(amount))
            .col_expr(
                entity::user::Column::Coins,
                Expr::col(entity::user::Column::Coins).sub(amount),
            )
            .col_expr(
                entity::user::Column::BankBalance,
                Expr::col(entity::user::Column::BankBalance).add(amount),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically moves coins from bank to wallet if the bank covers `amount`.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Coins to withdraw
    ///
    /// # Returns
    /// - `Ok(true)` - Withdrawal happened
    /// - `Ok(false)` - Bank balance was insufficient; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn try_withdraw_bank(&self, user_id: u64, amount: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .filter(entity::user::Column::BankBalance.gte(amount))
            .col_expr(
                entity::user::Column::BankBalance,
                Expr::col(entity::user::Column::BankBalance).sub(amount),
            )
            .col_expr(
                entity::user::Column::Coins,
                Expr::col(entity::user::Column::Coins).add(amount),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Persists the pity counter after a draw batch completes.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `counter` - Final counter value for the batch
    ///
    /// # Returns
    /// - `Ok(())` - Counter persisted (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_pity_counter(&self, user_id: u64, counter: u32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .col_expr(
                entity::user::Column::PityCounter,
                Expr::value(counter as i32),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets or clears the equipped power slot.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `user_power_id` - Owned-power row id to equip, or None to unequip
    ///
    /// # Returns
    /// - `Ok(())` - Slot updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_equipped_power(
        &self,
        user_id: u64,
        user_power_id: Option<i64>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .col_expr(
                entity::user::Column::EquippedPowerId,
                Expr::value(user_power_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the arena ladder position.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `arena_rank` - New ladder position
    ///
    /// # Returns
    /// - `Ok(())` - Position updated (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_arena_rank(&self, user_id: u64, arena_rank: i64) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id as i64))
            .col_expr(entity::user::Column::ArenaRank, Expr::value(arena_rank))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
