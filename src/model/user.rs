//! User profile domain models and parameters.
//!
//! Provides the profile model carrying a user's economy fields (coins, bank,
//! draw balance, pity counter, equip state, arena rank) plus parameter types
//! for registration and the result types returned by economy operations.

use chrono::{DateTime, Utc};

/// A registered user's profile with all economy fields.
///
/// Every field that money-like operations touch lives on this one row:
/// `coins`, `bank_balance`, `gacha_draws`, `pity_counter`,
/// `equipped_power_id`, and `arena_rank` are only ever mutated inside a
/// keyed-lock + transaction scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Discord ID of the user.
    pub discord_id: u64,
    /// Display name captured at registration.
    pub name: String,
    /// Wallet coins.
    pub coins: i64,
    /// Banked coins, safe from gambling losses.
    pub bank_balance: i64,
    /// Remaining gacha draw balance.
    pub gacha_draws: i64,
    /// Pity counter, within `[0, PITY_THRESHOLD]`.
    pub pity_counter: u32,
    /// Currently equipped owned-power row id, if any.
    pub equipped_power_id: Option<i64>,
    /// Arena ladder position; lower is better.
    pub arena_rank: i64,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Converts an entity model to a profile at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Profile` - The converted domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id as u64,
            name: entity.name,
            coins: entity.coins,
            bank_balance: entity.bank_balance,
            gacha_draws: entity.gacha_draws,
            pity_counter: entity.pity_counter.max(0) as u32,
            equipped_power_id: entity.equipped_power_id,
            arena_rank: entity.arena_rank,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new profile at registration.
#[derive(Debug, Clone)]
pub struct RegisterProfileParam {
    /// Discord ID of the user.
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Starting wallet coins.
    pub coins: i64,
    /// Starting gacha draw balance (registration bonus).
    pub gacha_draws: i64,
    /// Initial arena ladder position.
    pub arena_rank: i64,
}

/// Wallet and bank balances after a deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    /// Wallet coins after the operation.
    pub coins: i64,
    /// Bank balance after the operation.
    pub bank_balance: i64,
}

/// Both parties' wallet balances after a coin transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferResult {
    /// Sender's wallet after the transfer.
    pub from_coins: i64,
    /// Recipient's wallet after the transfer.
    pub to_coins: i64,
}

/// Outcome of an arena rank swap after a PvP battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaSwapResult {
    /// Winner's ladder position after the swap.
    pub winner_rank: i64,
    /// Loser's ladder position after the swap.
    pub loser_rank: i64,
    /// Whether the positions actually changed (the winner was ranked below).
    pub swapped: bool,
}
