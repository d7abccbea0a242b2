//! Power catalog data repository for database operations.
//!
//! This module provides the `PowerRepository` for reading and seeding the power
//! catalog. Catalog rows are immutable once created; draw and store code paths
//! only ever read them. Conversion to `PowerDefinition` validates the stored
//! rank name, so a mis-authored row surfaces as a configuration error instead
//! of silently skewing draw weights.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder};

use crate::{
    error::AppError,
    model::power::{CreatePowerParam, PowerDefinition},
};

/// Repository providing database operations for the power catalog.
pub struct PowerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PowerRepository<'a, C> {
    /// Creates a new PowerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `PowerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches the entire catalog, ordered by ascending base CP.
    ///
    /// The batch orchestrator calls this once per batch and shares the result
    /// across every draw in the batch.
    ///
    /// # Returns
    /// - `Ok(Vec<PowerDefinition>)` - All catalog entries
    /// - `Err(AppError::GachaErr)` - A row carries an unknown rank name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<PowerDefinition>, AppError> {
        let entities = entity::prelude::Power::find()
            .order_by_asc(entity::power::Column::BaseCp)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| PowerDefinition::from_entity(entity).map_err(AppError::from))
            .collect()
    }

    /// Finds a catalog entry by id.
    ///
    /// # Arguments
    /// - `power_id` - Catalog id of the power
    ///
    /// # Returns
    /// - `Ok(Some(PowerDefinition))` - Entry found
    /// - `Ok(None)` - No entry with that id
    /// - `Err(AppError::GachaErr)` - The row carries an unknown rank name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, power_id: i64) -> Result<Option<PowerDefinition>, AppError> {
        let entity = entity::prelude::Power::find_by_id(power_id)
            .one(self.db)
            .await?;

        entity
            .map(|entity| PowerDefinition::from_entity(entity).map_err(AppError::from))
            .transpose()
    }

    /// Creates a new catalog entry.
    ///
    /// Used by seeding and admin tooling; player-facing code never writes the
    /// catalog.
    ///
    /// # Arguments
    /// - `param` - Name, description, rank, base CP, and base price
    ///
    /// # Returns
    /// - `Ok(PowerDefinition)` - The created entry
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePowerParam) -> Result<PowerDefinition, AppError> {
        let entity = entity::power::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            rank: ActiveValue::Set(param.rank.name().to_string()),
            base_cp: ActiveValue::Set(param.base_cp),
            base_price: ActiveValue::Set(param.base_price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PowerDefinition::from_entity(entity)?)
    }
}
