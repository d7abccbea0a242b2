//! Economy service: registration, banking, transfers, equipment, arena, store.
//!
//! Every operation here is a read-modify-write on one or two users' economy
//! fields, so each runs inside the appropriate keyed lock(s) and a single
//! transaction. Cross-user operations acquire both keys in deterministic order.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{power::PowerRepository, user::UserRepository, user_power::UserPowerRepository},
    error::{economy::EconomyError, AppError},
    gacha::{cp, rank::RankTable},
    model::{
        power::{CreateUserPowerParam, OwnedPower},
        user::{ArenaSwapResult, Balances, Profile, RegisterProfileParam, TransferResult},
    },
    sync::keyed_mutex::{KeyedMutex, ResourceKey},
};

/// Coins granted to a newly registered user.
pub const STARTING_COINS: i64 = 1_000;

/// Gacha draws granted to a newly registered user.
pub const STARTING_DRAWS: i64 = 5;

/// Service providing business logic for the coin/bank/equip/arena economy.
pub struct EconomyService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a KeyedMutex,
    table: &'a RankTable,
}

impl<'a> EconomyService<'a> {
    /// Creates a new EconomyService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `locks` - Process-wide lock registry
    /// - `table` - Validated rank table (store pricing reads it)
    ///
    /// # Returns
    /// - `EconomyService` - New service instance
    pub fn new(db: &'a DatabaseConnection, locks: &'a KeyedMutex, table: &'a RankTable) -> Self {
        Self { db, locks, table }
    }

    /// Registers a new user with the starting grants.
    ///
    /// The initial arena ladder position is one past the current player count.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `name` - Display name to record
    ///
    /// # Returns
    /// - `Ok(Profile)` - The newly created profile
    /// - `Err(AppError::EconomyErr(AlreadyRegistered))` - A profile already exists
    /// - `Err(AppError::DbErr)` - Database error during creation
    pub async fn register(&self, user_id: u64, name: String) -> Result<Profile, AppError> {
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);

        if users.find_by_discord_id(user_id).await?.is_some() {
            return Err(EconomyError::AlreadyRegistered {
                discord_id: user_id,
            }
            .into());
        }

        let arena_rank = users.count().await? as i64 + 1;
        let profile = users
            .create(RegisterProfileParam {
                discord_id: user_id,
                name,
                coins: STARTING_COINS,
                gacha_draws: STARTING_DRAWS,
                arena_rank,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("registered user {} at arena rank {}", user_id, arena_rank);

        Ok(profile)
    }

    /// Moves coins from wallet to bank.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Coins to deposit, must be positive
    ///
    /// # Returns
    /// - `Ok(Balances)` - Wallet and bank balances after the deposit
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `amount` not positive
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::EconomyErr(InsufficientCoins))` - Wallet short; nothing moved
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn deposit(&self, user_id: u64, amount: i64) -> Result<Balances, AppError> {
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount { amount }.into());
        }

        let _guard = self.locks.acquire(ResourceKey::Coins(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let profile = self.require_profile(&users, user_id).await?;

        if profile.coins < amount {
            return Err(EconomyError::InsufficientCoins {
                required: amount,
                available: profile.coins,
            }
            .into());
        }

        let moved = users.try_deposit_bank(user_id, amount).await?;
        if !moved {
            return Err(EconomyError::InsufficientCoins {
                required: amount,
                available: profile.coins,
            }
            .into());
        }

        txn.commit().await?;

        Ok(Balances {
            coins: profile.coins - amount,
            bank_balance: profile.bank_balance + amount,
        })
    }

    /// Moves coins from bank to wallet.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Coins to withdraw, must be positive
    ///
    /// # Returns
    /// - `Ok(Balances)` - Wallet and bank balances after the withdrawal
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `amount` not positive
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::EconomyErr(InsufficientBank))` - Bank short; nothing moved
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn withdraw(&self, user_id: u64, amount: i64) -> Result<Balances, AppError> {
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount { amount }.into());
        }

        let _guard = self.locks.acquire(ResourceKey::Coins(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let profile = self.require_profile(&users, user_id).await?;

        if profile.bank_balance < amount {
            return Err(EconomyError::InsufficientBank {
                required: amount,
                available: profile.bank_balance,
            }
            .into());
        }

        let moved = users.try_withdraw_bank(user_id, amount).await?;
        if !moved {
            return Err(EconomyError::InsufficientBank {
                required: amount,
                available: profile.bank_balance,
            }
            .into());
        }

        txn.commit().await?;

        Ok(Balances {
            coins: profile.coins + amount,
            bank_balance: profile.bank_balance - amount,
        })
    }

    /// Transfers wallet coins between two users (PvP rewards, gifts).
    ///
    /// Both users' coins locks are acquired in deterministic order before the
    /// transaction opens, so two opposite transfers can never deadlock.
    ///
    /// # Arguments
    /// - `from` - Discord ID of the sender
    /// - `to` - Discord ID of the recipient
    /// - `amount` - Coins to transfer, must be positive
    ///
    /// # Returns
    /// - `Ok(TransferResult)` - Both wallets after the transfer
    /// - `Err(AppError::EconomyErr(SelfTransfer))` - Sender and recipient identical
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `amount` not positive
    /// - `Err(AppError::EconomyErr(NotRegistered))` - Either profile missing
    /// - `Err(AppError::EconomyErr(InsufficientCoins))` - Sender short; nothing moved
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn transfer_coins(
        &self,
        from: u64,
        to: u64,
        amount: i64,
    ) -> Result<TransferResult, AppError> {
        if from == to {
            return Err(EconomyError::SelfTransfer.into());
        }
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount { amount }.into());
        }

        let _guards = self
            .locks
            .acquire_many(vec![ResourceKey::Coins(from), ResourceKey::Coins(to)])
            .await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let sender = self.require_profile(&users, from).await?;
        let recipient = self.require_profile(&users, to).await?;

        if sender.coins < amount {
            return Err(EconomyError::InsufficientCoins {
                required: amount,
                available: sender.coins,
            }
            .into());
        }

        let spent = users.try_spend_coins(from, amount).await?;
        if !spent {
            return Err(EconomyError::InsufficientCoins {
                required: amount,
                available: sender.coins,
            }
            .into());
        }

        users.add_coins(to, amount).await?;

        txn.commit().await?;

        tracing::debug!("transferred {} coins from {} to {}", amount, from, to);

        Ok(TransferResult {
            from_coins: sender.coins - amount,
            to_coins: recipient.coins + amount,
        })
    }

    /// Equips an owned power instance.
    ///
    /// Ownership is verified inside the lock: the instance must exist and
    /// belong to the requesting user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `user_power_id` - Owned-instance row id to equip
    ///
    /// # Returns
    /// - `Ok(OwnedPower)` - The equipped instance
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::EconomyErr(PowerNotOwned))` - Missing or foreign instance
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn equip_power(
        &self,
        user_id: u64,
        user_power_id: i64,
    ) -> Result<OwnedPower, AppError> {
        let _guard = self.locks.acquire(ResourceKey::Equip(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        self.require_profile(&users, user_id).await?;

        let owned = UserPowerRepository::new(&txn)
            .find_by_id(user_power_id)
            .await?
            .filter(|owned| owned.user_id == user_id)
            .ok_or(EconomyError::PowerNotOwned {
                user_power_id,
                discord_id: user_id,
            })?;

        users
            .set_equipped_power(user_id, Some(user_power_id))
            .await?;

        txn.commit().await?;

        Ok(owned)
    }

    /// Clears the equipped power slot.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(())` - Slot cleared
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn unequip_power(&self, user_id: u64) -> Result<(), AppError> {
        let _guard = self.locks.acquire(ResourceKey::Equip(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        self.require_profile(&users, user_id).await?;

        users.set_equipped_power(user_id, None).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Swaps two users' arena ladder positions after a PvP battle.
    ///
    /// Positions change only when the winner is ranked below (numerically
    /// above) the loser; defeating someone already beneath you changes
    /// nothing. Both arena locks are acquired in deterministic order.
    ///
    /// # Arguments
    /// - `winner` - Discord ID of the battle winner
    /// - `loser` - Discord ID of the battle loser
    ///
    /// # Returns
    /// - `Ok(ArenaSwapResult)` - Final positions and whether they changed
    /// - `Err(AppError::EconomyErr(SelfTransfer))` - Winner and loser identical
    /// - `Err(AppError::EconomyErr(NotRegistered))` - Either profile missing
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn swap_arena_ranks(
        &self,
        winner: u64,
        loser: u64,
    ) -> Result<ArenaSwapResult, AppError> {
        if winner == loser {
            return Err(EconomyError::SelfTransfer.into());
        }

        let _guards = self
            .locks
            .acquire_many(vec![ResourceKey::Arena(winner), ResourceKey::Arena(loser)])
            .await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let winner_profile = self.require_profile(&users, winner).await?;
        let loser_profile = self.require_profile(&users, loser).await?;

        if winner_profile.arena_rank <= loser_profile.arena_rank {
            return Ok(ArenaSwapResult {
                winner_rank: winner_profile.arena_rank,
                loser_rank: loser_profile.arena_rank,
                swapped: false,
            });
        }

        users
            .set_arena_rank(winner, loser_profile.arena_rank)
            .await?;
        users
            .set_arena_rank(loser, winner_profile.arena_rank)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "arena swap: {} takes rank {}, {} drops to {}",
            winner,
            loser_profile.arena_rank,
            loser,
            winner_profile.arena_rank
        );

        Ok(ArenaSwapResult {
            winner_rank: loser_profile.arena_rank,
            loser_rank: winner_profile.arena_rank,
            swapped: true,
        })
    }

    /// Buys a power from the store.
    ///
    /// Price is the definition's base price times its rank's configured
    /// multiplier. The purchased instance rolls a fresh CP from the rank's
    /// variance, exactly like a drawn one.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the buyer
    /// - `power_id` - Catalog id of the power to buy
    ///
    /// # Returns
    /// - `Ok(OwnedPower)` - The newly created instance
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::NotFound)` - No catalog entry with that id
    /// - `Err(AppError::EconomyErr(InsufficientCoins))` - Coins short; nothing consumed
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn purchase_power(&self, user_id: u64, power_id: i64) -> Result<OwnedPower, AppError> {
        let _guard = self.locks.acquire(ResourceKey::Coins(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);
        let profile = self.require_profile(&users, user_id).await?;

        let definition = PowerRepository::new(&txn)
            .find_by_id(power_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("power {} not found", power_id)))?;

        let price = definition.base_price * self.table.config(definition.rank).price_multiplier;
        if profile.coins < price {
            return Err(EconomyError::InsufficientCoins {
                required: price,
                available: profile.coins,
            }
            .into());
        }

        let spent = users.try_spend_coins(user_id, price).await?;
        if !spent {
            return Err(EconomyError::InsufficientCoins {
                required: price,
                available: profile.coins,
            }
            .into());
        }

        let variance = self.table.config(definition.rank).variance;
        let owned = UserPowerRepository::new(&txn)
            .create(CreateUserPowerParam {
                user_id,
                power_id: definition.id,
                combat_power: cp::generate_cp(definition.base_cp, variance),
            })
            .await?;

        txn.commit().await?;

        tracing::debug!("user {} bought power {} for {} coins", user_id, power_id, price);

        Ok(owned)
    }

    /// Fetches a profile or reports the user as unregistered.
    async fn require_profile<C: sea_orm::ConnectionTrait>(
        &self,
        users: &UserRepository<'_, C>,
        user_id: u64,
    ) -> Result<Profile, AppError> {
        users
            .find_by_discord_id(user_id)
            .await?
            .ok_or_else(|| EconomyError::NotRegistered {
                discord_id: user_id,
            }
            .into())
    }
}
