//! Titanbot, an Attack-on-Titan-themed RPG Discord bot.
//!
//! The core of the crate is the gacha draw pipeline (rank table and resolver,
//! CP generation, pity tracking, weighted draw engine) and the atomic economy
//! layer protecting coins, draw balances, inventory, equip state, and arena
//! ranks behind per-user keyed locks and database transactions. The bot layer
//! is thin plumbing over the services in `service`; command-handling
//! collaborators invoke the same operations in-process.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod gacha;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod sync;
