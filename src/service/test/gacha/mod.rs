use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::data::gacha_history::GachaHistoryRepository;
use crate::data::user::UserRepository;
use crate::data::user_power::UserPowerRepository;
use crate::error::{economy::EconomyError, gacha::GachaError, AppError};
use crate::gacha::rank::{Rank, RankTable};
use crate::gacha::roll::Roller;
use crate::model::gacha::DrawType;
use crate::service::gacha::{GachaService, DRAW_PRICE, MAX_BATCH_DRAWS, MAX_DRAW_PURCHASE};
use crate::sync::keyed_mutex::KeyedMutex;

mod concurrency;

/// Roller that always selects the same rank, picks the first pool entry, and
/// applies no CP variance. Stands in for "the weighted roll never hits the top
/// tier" in pity tests.
struct FixedRoller {
    rank: Rank,
}

impl Roller for FixedRoller {
    fn roll_rank(&mut self, _table: &RankTable) -> Rank {
        self.rank
    }

    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }

    fn roll_variance(&mut self, _variance: f64) -> f64 {
        0.0
    }
}
