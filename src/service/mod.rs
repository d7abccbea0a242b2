//! Business logic layer.
//!
//! Services orchestrate repositories inside keyed-lock + transaction scopes.
//! Every economy mutation in the application flows through one of these
//! services; nothing else writes coins, draws, equip state, or arena ranks.

pub mod economy;
pub mod gacha;
