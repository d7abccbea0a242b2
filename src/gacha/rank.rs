//! Rank configuration and CP-to-rank resolution.
//!
//! The rank table is the leaf dependency of the whole draw pipeline: resolver,
//! CP generator, weighted roll, and store pricing all read from it. The
//! built-in table is used unless an operator supplies a JSON override at
//! startup (see `RankTable::from_json_str`).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered rarity tier for powers. Higher order = rarer and stronger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Normal,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 5] = [
        Rank::Normal,
        Rank::Rare,
        Rank::Epic,
        Rank::Legendary,
        Rank::Mythic,
    ];

    /// Numeric order used for comparisons and sorting; `Normal` is 0.
    pub fn order(self) -> usize {
        match self {
            Rank::Normal => 0,
            Rank::Rare => 1,
            Rank::Epic => 2,
            Rank::Legendary => 3,
            Rank::Mythic => 4,
        }
    }

    /// Canonical display name, matching what catalog rows store.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Normal => "Normal",
            Rank::Rare => "Rare",
            Rank::Epic => "Epic",
            Rank::Legendary => "Legendary",
            Rank::Mythic => "Mythic",
        }
    }

    /// Parses a rank from its name, case-insensitively.
    ///
    /// # Returns
    /// - `Some(Rank)` - Recognized rank name
    /// - `None` - Unknown name (a catalog data bug; see `GachaError::UnknownRank`)
    pub fn from_name(name: &str) -> Option<Rank> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one rank: CP floor, gacha weight, and display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// The rank this entry configures.
    pub rank: Rank,
    /// Lowest CP that classifies as this rank.
    pub min_cp: i64,
    /// Probability mass in the weighted roll. Zero weight = undrawable.
    pub weight: u32,
    /// CP variance applied to draws of this rank (e.g. 0.10 for ±10%).
    pub variance: f64,
    /// Store price multiplier applied on top of a power's base price.
    pub price_multiplier: i64,
    /// Embed color associated with the rank.
    pub color: u32,
    /// Emoji shown next to the rank name.
    pub emoji: String,
}

/// Validation errors for operator-supplied rank tables.
#[derive(Error, Debug)]
pub enum RankTableError {
    /// The JSON document did not parse as a list of rank entries.
    #[error("failed to parse rank table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rank appeared more than once.
    #[error("rank {0} appears more than once in the rank table")]
    DuplicateRank(Rank),

    /// A rank was missing entirely.
    #[error("rank {0} is missing from the rank table")]
    MissingRank(Rank),

    /// Every entry has zero weight, so no rank could ever be drawn.
    #[error("every rank has zero gacha weight, nothing is drawable")]
    NothingDrawable,
}

/// The full rank configuration: exactly one entry per rank, ascending order.
///
/// Constructed via `Default` (built-in table) or `from_json_str` (operator
/// override). Construction validates that every rank is present exactly once
/// and at least one rank is drawable, so lookups by rank are total.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    // Invariant: len == Rank::ALL.len(), entries[i].rank.order() == i.
    entries: Vec<RankConfig>,
}

impl RankTable {
    /// Builds a validated table from a list of entries in any order.
    ///
    /// # Arguments
    /// - `entries` - One config entry per rank
    ///
    /// # Returns
    /// - `Ok(RankTable)` - Entries validated and stored in ascending rank order
    /// - `Err(RankTableError)` - Duplicate or missing rank, or nothing drawable
    pub fn new(entries: Vec<RankConfig>) -> Result<Self, RankTableError> {
        let mut slots: [Option<RankConfig>; 5] = [None, None, None, None, None];

        for entry in entries {
            let slot = &mut slots[entry.rank.order()];
            if slot.is_some() {
                return Err(RankTableError::DuplicateRank(entry.rank));
            }
            *slot = Some(entry);
        }

        let mut ordered = Vec::with_capacity(Rank::ALL.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(entry) => ordered.push(entry),
                None => return Err(RankTableError::MissingRank(Rank::ALL[index])),
            }
        }

        if ordered.iter().all(|entry| entry.weight == 0) {
            return Err(RankTableError::NothingDrawable);
        }

        Ok(Self { entries: ordered })
    }

    /// Parses and validates a table from a JSON array of entries.
    ///
    /// # Arguments
    /// - `raw` - JSON document, an array of `RankConfig` objects
    ///
    /// # Returns
    /// - `Ok(RankTable)` - Parsed and validated table
    /// - `Err(RankTableError)` - Malformed JSON or failed validation
    pub fn from_json_str(raw: &str) -> Result<Self, RankTableError> {
        let entries: Vec<RankConfig> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    /// Entries in ascending rank order.
    pub fn entries(&self) -> &[RankConfig] {
        &self.entries
    }

    /// The config entry for a rank. Total: every rank has exactly one entry.
    pub fn config(&self, rank: Rank) -> &RankConfig {
        &self.entries[rank.order()]
    }

    /// The lowest-order rank.
    pub fn lowest(&self) -> Rank {
        self.entries[0].rank
    }

    /// The top tier, i.e. the highest-order rank. Pity forces draws to this.
    pub fn top(&self) -> Rank {
        self.entries[self.entries.len() - 1].rank
    }

    /// Sum of all gacha weights. Always > 0 for a validated table.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.weight)).sum()
    }

    /// Resolves a CP value to the rank whose range contains it.
    ///
    /// Total function: never fails for any CP. Walks the entries tracking the
    /// highest-order rank whose `min_cp` is at or below the value; a CP below
    /// every floor resolves to the lowest rank. When configured ranges overlap
    /// the higher rank wins, which is the player-favoring reading of an
    /// ambiguous table.
    ///
    /// # Arguments
    /// - `cp` - Combat power to classify
    ///
    /// # Returns
    /// - `Rank` - The rank the CP falls into
    pub fn resolve(&self, cp: i64) -> Rank {
        let mut resolved = self.lowest();
        for entry in &self.entries {
            if entry.min_cp <= cp && entry.rank.order() >= resolved.order() {
                resolved = entry.rank;
            }
        }
        resolved
    }
}

impl Default for RankTable {
    /// The built-in rank table.
    ///
    /// Weights sum to 100, so each weight reads directly as a percentage.
    fn default() -> Self {
        let entries = vec![
            RankConfig {
                rank: Rank::Normal,
                min_cp: 0,
                weight: 50,
                variance: 0.10,
                price_multiplier: 1,
                color: 0x95a5a6,
                emoji: "⚪".to_string(),
            },
            RankConfig {
                rank: Rank::Rare,
                min_cp: 300,
                weight: 25,
                variance: 0.10,
                price_multiplier: 2,
                color: 0x3498db,
                emoji: "🔵".to_string(),
            },
            RankConfig {
                rank: Rank::Epic,
                min_cp: 800,
                weight: 15,
                variance: 0.10,
                price_multiplier: 4,
                color: 0x9b59b6,
                emoji: "🟣".to_string(),
            },
            RankConfig {
                rank: Rank::Legendary,
                min_cp: 2_000,
                weight: 7,
                variance: 0.10,
                price_multiplier: 10,
                color: 0xf1c40f,
                emoji: "🟡".to_string(),
            },
            RankConfig {
                rank: Rank::Mythic,
                min_cp: 5_000,
                weight: 3,
                variance: 0.10,
                price_multiplier: 25,
                color: 0xe74c3c,
                emoji: "🔴".to_string(),
            },
        ];

        match Self::new(entries) {
            Ok(table) => table,
            // The built-in table is statically complete.
            Err(_) => unreachable!("built-in rank table is valid"),
        }
    }
}
