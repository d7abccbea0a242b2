//! The draw engine: one draw from pity decision to persisted rows.
//!
//! The engine never manages its own lock or transaction; it is always invoked
//! from inside the orchestrator's locked, transactional section and persists
//! through whatever connection it is handed. Rank table and roller are
//! injected, so tests drive it with fixed rolls.

use sea_orm::ConnectionTrait;

use crate::{
    data::{gacha_history::GachaHistoryRepository, user_power::UserPowerRepository},
    error::{gacha::GachaError, AppError},
    gacha::{cp, pity::PityState, rank::RankTable, roll::Roller},
    model::{
        gacha::{AppendHistoryParam, DrawResult, DrawType},
        power::{CreateUserPowerParam, PowerDefinition},
    },
};

/// Executes single draws against a shared catalog.
///
/// Constructed per batch by the orchestrator, borrowing the rank table and
/// the roller for the duration of the batch.
pub struct DrawEngine<'a> {
    table: &'a RankTable,
    roller: &'a mut dyn Roller,
}

impl<'a> DrawEngine<'a> {
    /// Creates an engine over the given rank table and roller.
    ///
    /// # Arguments
    /// - `table` - Validated rank configuration
    /// - `roller` - Randomness source (or a deterministic fake in tests)
    ///
    /// # Returns
    /// - `DrawEngine` - Engine ready to perform draws
    pub fn new(table: &'a RankTable, roller: &'a mut dyn Roller) -> Self {
        Self { table, roller }
    }

    /// Performs one draw for a user and persists its rows.
    ///
    /// Algorithm:
    /// 1. Advance the pity counter; a threshold crossing (first in the batch)
    ///    forces the top tier.
    /// 2. Otherwise select a rank by weighted roll.
    /// 3. Filter the catalog to that rank's pool; an empty pool is a fatal
    ///    configuration error, never a silent fallback to another rank.
    /// 4. Pick uniformly within the pool and generate CP from the power's base
    ///    CP using the rank's configured variance.
    /// 5. Settle the pity counter (reset on a top-tier result).
    /// 6. Insert the ownership row and append the history row on the supplied
    ///    connection (the orchestrator's open transaction).
    ///
    /// # Arguments
    /// - `db` - The orchestrator's transaction
    /// - `user_id` - Discord ID of the drawing user
    /// - `draw_type` - How the draw is paid for (recorded in history)
    /// - `pity` - The batch's evolving pity state
    /// - `trigger_used` - Whether this batch already forced a draw
    /// - `catalog` - The full power catalog, fetched once per batch
    ///
    /// # Returns
    /// - `Ok(DrawResult)` - The drawn power, its CP and display rank, and
    ///   whether pity forced it
    /// - `Err(AppError::GachaErr(EmptyRankPool))` - The selected rank has no
    ///   catalog entries
    /// - `Err(AppError::DbErr)` - Database error while persisting
    pub async fn draw_once<C: ConnectionTrait>(
        &mut self,
        db: &C,
        user_id: u64,
        draw_type: DrawType,
        pity: &mut PityState,
        trigger_used: &mut bool,
        catalog: &[PowerDefinition],
    ) -> Result<DrawResult, AppError> {
        let forced = pity.advance(*trigger_used);
        if forced {
            *trigger_used = true;
        }

        let selected = if forced {
            self.table.top()
        } else {
            self.roller.roll_rank(self.table)
        };

        let pool: Vec<&PowerDefinition> = catalog
            .iter()
            .filter(|power| power.rank == selected)
            .collect();
        if pool.is_empty() {
            return Err(GachaError::EmptyRankPool { rank: selected }.into());
        }

        let definition = pool[self.roller.pick_index(pool.len())];

        let variance = self.table.config(selected).variance;
        let combat_power = cp::scale(definition.base_cp, self.roller.roll_variance(variance));

        pity.settle(selected == self.table.top());

        let owned = UserPowerRepository::new(db)
            .create(CreateUserPowerParam {
                user_id,
                power_id: definition.id,
                combat_power,
            })
            .await?;

        // Rank is re-resolved from the generated CP; the selected rank is not
        // assumed authoritative for display.
        let display_rank = self.table.resolve(combat_power);

        GachaHistoryRepository::new(db)
            .append(AppendHistoryParam {
                user_id,
                power_id: definition.id,
                power_name: definition.name.clone(),
                rank: display_rank,
                combat_power,
                draw_type,
            })
            .await?;

        Ok(DrawResult {
            power: definition.clone(),
            owned_id: owned.id,
            combat_power,
            rank: display_rank,
            pity_triggered: forced,
        })
    }
}
