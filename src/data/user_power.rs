//! Owned-power data repository for database operations.
//!
//! This module provides the `UserPowerRepository` for managing the power
//! instances users own. Instances are created by draws and store purchases and
//! destroyed on consumption; only the randomized CP is stored, never a cached
//! rank.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::power::{CreateUserPowerParam, OwnedPower, PowerDefinition},
};

/// Repository providing database operations for owned power instances.
pub struct UserPowerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserPowerRepository<'a, C> {
    /// Creates a new UserPowerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `UserPowerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new owned instance for a user.
    ///
    /// # Arguments
    /// - `param` - Owner, catalog id, and the instance's randomized CP
    ///
    /// # Returns
    /// - `Ok(OwnedPower)` - The created instance
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserPowerParam) -> Result<OwnedPower, DbErr> {
        let entity = entity::user_power::ActiveModel {
            user_id: ActiveValue::Set(param.user_id as i64),
            power_id: ActiveValue::Set(param.power_id),
            combat_power: ActiveValue::Set(param.combat_power),
            obtained_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OwnedPower::from_entity(entity))
    }

    /// Finds an owned instance by row id.
    ///
    /// # Arguments
    /// - `user_power_id` - Owned-instance row id
    ///
    /// # Returns
    /// - `Ok(Some(OwnedPower))` - Instance found
    /// - `Ok(None)` - No instance with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_power_id: i64) -> Result<Option<OwnedPower>, DbErr> {
        let entity = entity::prelude::UserPower::find_by_id(user_power_id)
            .one(self.db)
            .await?;

        Ok(entity.map(OwnedPower::from_entity))
    }

    /// Gets a user's collection with each instance's catalog definition.
    ///
    /// Ordered by descending combat power. Display collaborators derive each
    /// instance's rank from its CP through the rank resolver.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<(OwnedPower, PowerDefinition)>)` - Instances with definitions
    /// - `Err(AppError::NotFound)` - An instance references a missing definition
    /// - `Err(AppError::GachaErr)` - A definition carries an unknown rank name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<(OwnedPower, PowerDefinition)>, AppError> {
        let rows = entity::prelude::UserPower::find()
            .filter(entity::user_power::Column::UserId.eq(user_id as i64))
            .order_by_desc(entity::user_power::Column::CombatPower)
            .find_also_related(entity::prelude::Power)
            .all(self.db)
            .await?;

        let mut collection = Vec::with_capacity(rows.len());
        for (instance, definition) in rows {
            let definition = definition.ok_or_else(|| {
                AppError::NotFound(format!(
                    "power definition {} referenced by instance {} is missing",
                    instance.power_id, instance.id
                ))
            })?;
            collection.push((
                OwnedPower::from_entity(instance),
                PowerDefinition::from_entity(definition)?,
            ));
        }

        Ok(collection)
    }

    /// Counts a user's owned instances.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the owner
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of owned instances
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_by_user(&self, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::UserPower::find()
            .filter(entity::user_power::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await
    }

    /// Deletes an owned instance (consumption by merge, loss, etc.).
    ///
    /// # Arguments
    /// - `user_power_id` - Owned-instance row id
    ///
    /// # Returns
    /// - `Ok(true)` - The instance existed and was deleted
    /// - `Ok(false)` - No instance with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_power_id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::UserPower::delete_by_id(user_power_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
