//! Power catalog and owned-instance domain models.

use chrono::{DateTime, Utc};

use crate::{error::gacha::GachaError, gacha::rank::Rank};

/// A catalog entry: one drawable/purchasable power definition.
///
/// Immutable once created; many owned instances may reference one definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerDefinition {
    /// Catalog id.
    pub id: i64,
    /// Display name of the power.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Authored rank, used to bucket the draw pool.
    pub rank: Rank,
    /// Base combat power that drawn instances vary around.
    pub base_cp: i64,
    /// Base store price before the rank multiplier.
    pub base_price: i64,
}

impl PowerDefinition {
    /// Converts an entity model to a definition at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(PowerDefinition)` - The converted domain model
    /// - `Err(GachaError::UnknownRank)` - The stored rank name is not in the
    ///   rank table (a catalog data bug)
    pub fn from_entity(entity: entity::power::Model) -> Result<Self, GachaError> {
        let rank = Rank::from_name(&entity.rank).ok_or_else(|| GachaError::UnknownRank {
            name: entity.rank.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            rank,
            base_cp: entity.base_cp,
            base_price: entity.base_price,
        })
    }
}

/// A power instance owned by one user.
///
/// Carries only the randomized CP; the display rank is always derived from CP
/// through the rank resolver rather than cached here.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedPower {
    /// Owned-instance row id.
    pub id: i64,
    /// Discord ID of the owner.
    pub user_id: u64,
    /// Catalog id of the referenced definition.
    pub power_id: i64,
    /// This instance's randomized combat power.
    pub combat_power: i64,
    /// When the instance was acquired.
    pub obtained_at: DateTime<Utc>,
}

impl OwnedPower {
    /// Converts an entity model to an owned power at the repository boundary.
    pub fn from_entity(entity: entity::user_power::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id as u64,
            power_id: entity.power_id,
            combat_power: entity.combat_power,
            obtained_at: entity.obtained_at,
        }
    }
}

/// Parameters for creating a catalog entry.
#[derive(Debug, Clone)]
pub struct CreatePowerParam {
    /// Display name of the power.
    pub name: String,
    /// Flavor description.
    pub description: String,
    /// Authored rank.
    pub rank: Rank,
    /// Base combat power.
    pub base_cp: i64,
    /// Base store price.
    pub base_price: i64,
}

/// Parameters for creating an owned power instance.
#[derive(Debug, Clone)]
pub struct CreateUserPowerParam {
    /// Discord ID of the owner.
    pub user_id: u64,
    /// Catalog id of the definition.
    pub power_id: i64,
    /// Randomized CP for this instance.
    pub combat_power: i64,
}
