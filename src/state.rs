//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each handler that needs it.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{gacha::rank::RankTable, sync::keyed_mutex::KeyedMutex};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `KeyedMutex` shares its lock registry through an `Arc`
/// - `Arc<RankTable>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Process-wide lock registry serializing per-user economy mutations.
    ///
    /// Every read-modify-write against coins, bank balance, draw balance,
    /// equip state, or arena rank must run inside a lock acquired from here;
    /// there is no unlocked mutation path.
    pub locks: KeyedMutex,

    /// Rank configuration shared by draw, store, and display code paths.
    pub ranks: Arc<RankTable>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `locks` - Keyed mutex registry for economy operations
    /// - `ranks` - Validated rank table
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, locks: KeyedMutex, ranks: RankTable) -> Self {
        Self {
            db,
            locks,
            ranks: Arc::new(ranks),
        }
    }
}
