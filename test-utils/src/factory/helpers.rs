//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::power::PowerFactory;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one power of each rank, so every rank has a drawable pool.
///
/// The base CP values sit far enough inside each rank's CP range that a
/// ±10% variance roll cannot cross a rank boundary:
///
/// 1. Vertical Maneuvering Gear (Normal, 150 CP)
/// 2. Thunder Spear (Rare, 450 CP)
/// 3. Jaw Titan (Epic, 1200 CP)
/// 4. Armored Titan (Legendary, 3000 CP)
/// 5. Founding Titan (Mythic, 6000 CP)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Vec<entity::power::Model>)` - Created catalog entries, lowest rank first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_default_catalog(
    db: &DatabaseConnection,
) -> Result<Vec<entity::power::Model>, DbErr> {
    let entries = [
        ("Vertical Maneuvering Gear", "Normal", 150, 500),
        ("Thunder Spear", "Rare", 450, 1_500),
        ("Jaw Titan", "Epic", 1_200, 4_000),
        ("Armored Titan", "Legendary", 3_000, 12_000),
        ("Founding Titan", "Mythic", 6_000, 40_000),
    ];

    let mut catalog = Vec::with_capacity(entries.len());
    for (name, rank, base_cp, base_price) in entries {
        let power = PowerFactory::new(db)
            .name(name)
            .rank(rank)
            .base_cp(base_cp)
            .base_price(base_price)
            .build()
            .await?;
        catalog.push(power);
    }

    Ok(catalog)
}

/// Creates a user together with the default five-rank catalog.
///
/// Convenience for draw tests that need a registered user and a complete
/// drawable catalog in one call.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, catalog))` - Created user and catalog entries
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_catalog(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, Vec<entity::power::Model>), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let catalog = create_default_catalog(db).await?;

    Ok((user, catalog))
}
