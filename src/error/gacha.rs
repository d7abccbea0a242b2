use thiserror::Error;

use crate::gacha::rank::{Rank, RankTableError};

/// Errors raised by the draw pipeline.
///
/// `EmptyRankPool` and `UnknownRank` are configuration errors: they indicate a
/// data-setup bug, abort the draw or batch without partial mutation, and are not
/// recoverable by retrying. The remaining variants are expected user-facing
/// conditions that consume no resources.
#[derive(Error, Debug)]
pub enum GachaError {
    /// A rank was selected for which the catalog holds no powers.
    ///
    /// The draw must not silently fall back to a different rank, since that
    /// would corrupt the pity and weight guarantees.
    #[error("no powers configured for rank {rank}")]
    EmptyRankPool {
        /// The rank the weighted roll (or pity) selected
        rank: Rank,
    },

    /// A catalog row carries a rank name that is not in the rank table.
    #[error("unknown rank name '{name}' in power catalog")]
    UnknownRank {
        /// The unrecognized rank string as stored
        name: String,
    },

    /// The user's draw balance cannot cover the requested batch.
    ///
    /// Reported before any mutation; the whole batch is aborted with zero
    /// side effects.
    #[error("insufficient gacha draws: requested {requested}, available {available}")]
    InsufficientDraws {
        /// Number of draws requested
        requested: u32,
        /// Draws actually available at the time of the locked re-read
        available: i64,
    },

    /// The requested batch size is outside the allowed range.
    #[error("invalid draw count {requested}: must be between 1 and {max}")]
    InvalidDrawCount {
        /// Number of draws requested
        requested: u32,
        /// Largest batch size allowed
        max: u32,
    },

    /// The rank table failed validation at load time.
    #[error(transparent)]
    RankTable(#[from] RankTableError),
}

impl GachaError {
    /// Shortfall between what was requested and what was available, when the
    /// variant carries one. Used by callers to render precise messages.
    pub fn shortfall(&self) -> Option<i64> {
        match self {
            Self::InsufficientDraws {
                requested,
                available,
            } => Some(i64::from(*requested) - available),
            _ => None,
        }
    }
}
