//! Gacha service: batch draw orchestration and draw purchases.
//!
//! The orchestrator is the only caller of the draw engine and owns the locking
//! protocol: one per-user gacha lock held across the whole batch, one
//! transaction committed once, balance re-read inside the lock, a conditional
//! single-statement deduction as defense in depth, and the catalog fetched
//! once per batch.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{gacha_history::GachaHistoryRepository, power::PowerRepository, user::UserRepository},
    error::{economy::EconomyError, gacha::GachaError, AppError},
    gacha::{
        engine::DrawEngine,
        pity::PityState,
        rank::RankTable,
        roll::{RandomRoller, Roller},
    },
    model::gacha::{BatchDrawResult, DrawResult, DrawType, PaginatedHistory, PurchaseResult},
    sync::keyed_mutex::{KeyedMutex, ResourceKey},
};

/// Price of one gacha draw in coins.
pub const DRAW_PRICE: i64 = 1_000;

/// Largest number of draws purchasable in one transaction.
pub const MAX_DRAW_PURCHASE: u32 = 100;

/// Largest batch size a single draw request may ask for.
pub const MAX_BATCH_DRAWS: u32 = 100;

/// Service providing draw and purchase operations.
///
/// Holds references to the shared database pool, lock registry, and rank
/// table. The roller is owned so tests can inject a deterministic fake via
/// `with_roller`.
pub struct GachaService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a KeyedMutex,
    table: &'a RankTable,
    roller: Box<dyn Roller>,
}

impl<'a> GachaService<'a> {
    /// Creates a new GachaService with the production roller.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `locks` - Process-wide lock registry
    /// - `table` - Validated rank table
    ///
    /// # Returns
    /// - `GachaService` - New service instance
    pub fn new(db: &'a DatabaseConnection, locks: &'a KeyedMutex, table: &'a RankTable) -> Self {
        Self::with_roller(db, locks, table, Box::new(RandomRoller::new()))
    }

    /// Creates a new GachaService with an injected roller.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `locks` - Process-wide lock registry
    /// - `table` - Validated rank table
    /// - `roller` - Randomness source, typically a deterministic fake in tests
    ///
    /// # Returns
    /// - `GachaService` - New service instance
    pub fn with_roller(
        db: &'a DatabaseConnection,
        locks: &'a KeyedMutex,
        table: &'a RankTable,
        roller: Box<dyn Roller>,
    ) -> Self {
        Self {
            db,
            locks,
            table,
            roller,
        }
    }

    /// Performs a single draw.
    ///
    /// A batch of one: the full batch protocol applies, including the balance
    /// deduction and pity bookkeeping.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the drawing user
    /// - `draw_type` - How the draw is paid for
    ///
    /// # Returns
    /// - `Ok(DrawResult)` - The drawn power
    /// - `Err(AppError)` - Same failure modes as `perform_batch_draw`
    pub async fn perform_draw(
        &mut self,
        user_id: u64,
        draw_type: DrawType,
    ) -> Result<DrawResult, AppError> {
        let mut batch = self.perform_batch_draw(user_id, 1, draw_type).await?;

        // A successful batch of one always contains exactly one result.
        match batch.draws.pop() {
            Some(draw) => Ok(draw),
            None => Err(AppError::NotFound("draw result missing from batch".to_string())),
        }
    }

    /// Performs `count` draws as a single atomic unit.
    ///
    /// Protocol, executed under the user's gacha lock and one transaction:
    /// 1. Re-read the draw balance inside the lock; a pre-check read from
    ///    before acquisition is explicitly distrusted.
    /// 2. Abort with the actual shortfall if the balance is short; zero side
    ///    effects.
    /// 3. Deduct the full batch cost in one conditional statement and verify
    ///    exactly one row changed.
    /// 4. Fetch the catalog once.
    /// 5. Run the engine `count` times, threading the pity state and the
    ///    batch's single forced-draw flag.
    /// 6. Persist the final pity counter, commit, and return.
    ///
    /// Any error mid-loop drops the transaction, rolling back the deduction
    /// and every row inserted so far: a batch never partially commits.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the drawing user
    /// - `count` - Number of draws, within `[1, MAX_BATCH_DRAWS]`
    /// - `draw_type` - How the draws are paid for
    ///
    /// # Returns
    /// - `Ok(BatchDrawResult)` - All draw results plus the final balances
    /// - `Err(AppError::GachaErr(InvalidDrawCount))` - `count` out of range
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::GachaErr(InsufficientDraws))` - Balance short; nothing consumed
    /// - `Err(AppError::GachaErr(EmptyRankPool))` - Catalog misconfigured; rolled back
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn perform_batch_draw(
        &mut self,
        user_id: u64,
        count: u32,
        draw_type: DrawType,
    ) -> Result<BatchDrawResult, AppError> {
        if count == 0 || count > MAX_BATCH_DRAWS {
            return Err(GachaError::InvalidDrawCount {
                requested: count,
                max: MAX_BATCH_DRAWS,
            }
            .into());
        }

        let _guard = self.locks.acquire(ResourceKey::Gacha(user_id)).await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);

        let profile = users
            .find_by_discord_id(user_id)
            .await?
            .ok_or(EconomyError::NotRegistered {
                discord_id: user_id,
            })?;

        if profile.gacha_draws < i64::from(count) {
            return Err(GachaError::InsufficientDraws {
                requested: count,
                available: profile.gacha_draws,
            }
            .into());
        }

        // The lock already serializes writers; the conditional deduction
        // still verifies the row count in case anything ever mutates draws
        // outside it.
        let debited = users.try_decrement_draws(user_id, count).await?;
        if !debited {
            return Err(GachaError::InsufficientDraws {
                requested: count,
                available: profile.gacha_draws,
            }
            .into());
        }

        let catalog = PowerRepository::new(&txn).get_all().await?;

        let mut pity = PityState::new(profile.pity_counter);
        let mut trigger_used = false;
        let mut engine = DrawEngine::new(self.table, self.roller.as_mut());

        let mut draws = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let draw = engine
                .draw_once(
                    &txn,
                    user_id,
                    draw_type,
                    &mut pity,
                    &mut trigger_used,
                    &catalog,
                )
                .await?;
            draws.push(draw);
        }

        users.set_pity_counter(user_id, pity.counter()).await?;

        txn.commit().await?;

        tracing::debug!(
            "user {} drew {} powers ({}), pity now {}",
            user_id,
            count,
            draw_type,
            pity.counter()
        );

        Ok(BatchDrawResult {
            draws,
            remaining_draws: profile.gacha_draws - i64::from(count),
            pity_counter: pity.counter(),
        })
    }

    /// Purchases gacha draws with wallet coins.
    ///
    /// Atomic coin-deduction + draw-increment under both the coins and gacha
    /// locks (acquired in deterministic order) and one transaction. Fails
    /// closed on an invalid amount or insufficient coins, with the exact
    /// shortfall reported and nothing consumed.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the purchasing user
    /// - `amount` - Number of draws to buy, within `[1, MAX_DRAW_PURCHASE]`
    ///
    /// # Returns
    /// - `Ok(PurchaseResult)` - Draws credited and coins deducted
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `amount` is zero
    /// - `Err(AppError::EconomyErr(PurchaseLimitExceeded))` - `amount` above the cap
    /// - `Err(AppError::EconomyErr(NotRegistered))` - No profile for the user
    /// - `Err(AppError::EconomyErr(InsufficientCoins))` - Coins short; nothing consumed
    /// - `Err(AppError::DbErr)` - Storage failure; rolled back
    pub async fn purchase_draws(
        &self,
        user_id: u64,
        amount: u32,
    ) -> Result<PurchaseResult, AppError> {
        if amount == 0 {
            return Err(EconomyError::InvalidAmount {
                amount: i64::from(amount),
            }
            .into());
        }
        if amount > MAX_DRAW_PURCHASE {
            return Err(EconomyError::PurchaseLimitExceeded {
                requested: amount,
                max: MAX_DRAW_PURCHASE,
            }
            .into());
        }

        let _guards = self
            .locks
            .acquire_many(vec![ResourceKey::Coins(user_id), ResourceKey::Gacha(user_id)])
            .await;
        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn);

        let profile = users
            .find_by_discord_id(user_id)
            .await?
            .ok_or(EconomyError::NotRegistered {
                discord_id: user_id,
            })?;

        let cost = i64::from(amount) * DRAW_PRICE;
        if profile.coins < cost {
            return Err(EconomyError::InsufficientCoins {
                required: cost,
                available: profile.coins,
            }
            .into());
        }

        let spent = users.try_spend_coins(user_id, cost).await?;
        if !spent {
            return Err(EconomyError::InsufficientCoins {
                required: cost,
                available: profile.coins,
            }
            .into());
        }

        users.add_draws(user_id, i64::from(amount)).await?;

        txn.commit().await?;

        tracing::debug!("user {} bought {} draws for {} coins", user_id, amount, cost);

        Ok(PurchaseResult {
            purchased: amount,
            cost,
            remaining_coins: profile.coins - cost,
            total_draws: profile.gacha_draws + i64::from(amount),
        })
    }

    /// Gets a user's draw history with pagination, newest first.
    ///
    /// Read-only: no lock is taken.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of records per page
    ///
    /// # Returns
    /// - `Ok(PaginatedHistory)` - Records for the page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn history(
        &self,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedHistory, AppError> {
        let history = GachaHistoryRepository::new(self.db);

        let (records, total) = history
            .get_by_user_paginated(user_id, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedHistory {
            records,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
