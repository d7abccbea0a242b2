//! Draw result and history domain models.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{gacha::rank::Rank, model::power::PowerDefinition};

/// How a draw was paid for, recorded on each history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawType {
    /// Daily/registration grants.
    Free,
    /// Draws bought with coins.
    Paid,
    /// Event or quest rewards.
    Bonus,
}

impl DrawType {
    /// The string stored in history rows.
    pub fn as_str(self) -> &'static str {
        match self {
            DrawType::Free => "free",
            DrawType::Paid => "paid",
            DrawType::Bonus => "bonus",
        }
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResult {
    /// The catalog definition that was drawn.
    pub power: PowerDefinition,
    /// Row id of the newly created owned instance.
    pub owned_id: i64,
    /// The instance's randomized combat power.
    pub combat_power: i64,
    /// Display rank, re-resolved from the generated CP.
    pub rank: Rank,
    /// Whether this draw was forced to the top tier by pity.
    pub pity_triggered: bool,
}

/// The outcome of a batch of draws billed as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchDrawResult {
    /// Results in draw order.
    pub draws: Vec<DrawResult>,
    /// Draw balance remaining after the batch deduction.
    pub remaining_draws: i64,
    /// Pity counter persisted after the batch.
    pub pity_counter: u32,
}

/// The outcome of a draw purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseResult {
    /// Number of draws purchased.
    pub purchased: u32,
    /// Coins spent.
    pub cost: i64,
    /// Wallet coins remaining after the purchase.
    pub remaining_coins: i64,
    /// Draw balance after the purchase.
    pub total_draws: i64,
}

/// One append-only history row: a completed draw, never mutated.
///
/// Snapshots the power's name and rank at draw time for display and audit;
/// balances are never reconstructed from history.
#[derive(Debug, Clone, PartialEq)]
pub struct GachaRecord {
    /// History row id.
    pub id: i64,
    /// Discord ID of the drawing user.
    pub user_id: u64,
    /// Catalog id of the drawn power.
    pub power_id: i64,
    /// Power name at draw time.
    pub power_name: String,
    /// Rank name at draw time.
    pub rank: String,
    /// CP the instance was created with.
    pub combat_power: i64,
    /// How the draw was paid for.
    pub draw_type: String,
    /// When the draw happened.
    pub created_at: DateTime<Utc>,
}

impl GachaRecord {
    /// Converts an entity model to a record at the repository boundary.
    pub fn from_entity(entity: entity::gacha_history::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id as u64,
            power_id: entity.power_id,
            power_name: entity.power_name,
            rank: entity.rank,
            combat_power: entity.combat_power,
            draw_type: entity.draw_type,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for appending a history row.
#[derive(Debug, Clone)]
pub struct AppendHistoryParam {
    /// Discord ID of the drawing user.
    pub user_id: u64,
    /// Catalog id of the drawn power.
    pub power_id: i64,
    /// Power name snapshot.
    pub power_name: String,
    /// Resolved rank snapshot.
    pub rank: Rank,
    /// Generated combat power.
    pub combat_power: i64,
    /// How the draw was paid for.
    pub draw_type: DrawType,
}

/// Paginated slice of a user's draw history.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedHistory {
    /// Records for this page, newest first.
    pub records: Vec<GachaRecord>,
    /// Total number of records across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of records per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}
