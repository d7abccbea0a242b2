//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `sea_orm::ConnectionTrait`, so the same methods run
//! against the pooled connection for plain reads or against an open transaction when
//! invoked from inside a locked critical section.

pub mod gacha_history;
pub mod power;
pub mod user;
pub mod user_power;

#[cfg(test)]
mod test;
