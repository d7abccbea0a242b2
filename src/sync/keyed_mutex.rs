//! Per-resource-key mutual exclusion for economy mutations.
//!
//! Many logically-concurrent user commands interleave on the single-process
//! runtime, and every database call is a suspension point. Any read-modify-write
//! against a user's coins, bank, draw balance, equip state, or arena rank must
//! therefore run inside a critical section keyed by that resource, or a
//! concurrent command could interleave between the read and the write and lose
//! an update. `KeyedMutex` is the one authoritative registry of those critical
//! sections; no code mutates economy fields through an unlocked path.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{Mutex, OwnedMutexGuard};

/// A lockable resource belonging to one user.
///
/// The variant order defines the global acquisition order used by
/// `acquire_many`, which keeps multi-key operations deadlock-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKey {
    /// Wallet and bank coin balances.
    Coins(u64),
    /// Gacha draw balance, pity counter, and draw-produced inventory rows.
    Gacha(u64),
    /// Equipped power slot.
    Equip(u64),
    /// Arena ladder position.
    Arena(u64),
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Coins(id) => write!(f, "coins_{}", id),
            ResourceKey::Gacha(id) => write!(f, "gacha_{}", id),
            ResourceKey::Equip(id) => write!(f, "equip_{}", id),
            ResourceKey::Arena(id) => write!(f, "arena_{}", id),
        }
    }
}

/// Process-wide registry of keyed async mutexes.
///
/// Guarantees one in-flight critical section per key at a time. Guards are
/// owned, so they release on drop along every path: success, error, or the
/// original caller abandoning the operation. Contention blocks; there is no
/// try-lock path.
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct KeyedMutex {
    locks: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl KeyedMutex {
    /// Creates an empty lock registry.
    pub fn new() -> Self {
        Self {
            locks: Arc::new(StdMutex::new(HashMap::new())),
        }
    }

    /// Acquires the lock for one resource key, waiting if it is held.
    ///
    /// The returned guard keeps the critical section open until dropped.
    /// Idle registry entries (no holder, no waiter) are pruned on the way in
    /// so the map does not grow with every user ever seen.
    ///
    /// # Arguments
    /// - `key` - The resource to serialize on
    ///
    /// # Returns
    /// - `OwnedMutexGuard` - Held for the duration of the critical section
    pub async fn acquire(&self, key: ResourceKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.retain(|_, entry| Arc::strong_count(entry) > 1);
            locks
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    /// Acquires several locks in deterministic (sorted) order.
    ///
    /// Cross-user operations touch two keys; sorting before acquiring ensures
    /// two transactions can never each hold the lock the other is waiting for.
    /// Duplicate keys are collapsed, since re-acquiring a held key would
    /// deadlock against ourselves.
    ///
    /// # Arguments
    /// - `keys` - The resources to serialize on, in any order
    ///
    /// # Returns
    /// - `Vec<OwnedMutexGuard>` - Guards for each distinct key, held until dropped
    pub async fn acquire_many(&self, mut keys: Vec<ResourceKey>) -> Vec<OwnedMutexGuard<()>> {
        keys.sort();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        for key in keys {
            guards.push(self.acquire(key).await);
        }
        guards
    }
}

impl Default for KeyedMutex {
    fn default() -> Self {
        Self::new()
    }
}
