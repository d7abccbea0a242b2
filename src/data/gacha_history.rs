//! Gacha history data repository for database operations.
//!
//! This module provides the `GachaHistoryRepository` for the append-only draw
//! log. Rows are never mutated after creation and are read only for display and
//! audit; balances are never reconstructed from them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::gacha::{AppendHistoryParam, GachaRecord};

/// Repository providing database operations for the draw history log.
pub struct GachaHistoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GachaHistoryRepository<'a, C> {
    /// Creates a new GachaHistoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `GachaHistoryRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one completed draw to the log.
    ///
    /// # Arguments
    /// - `param` - User, power snapshot, CP, and draw type
    ///
    /// # Returns
    /// - `Ok(GachaRecord)` - The appended record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn append(&self, param: AppendHistoryParam) -> Result<GachaRecord, DbErr> {
        let entity = entity::gacha_history::ActiveModel {
            user_id: ActiveValue::Set(param.user_id as i64),
            power_id: ActiveValue::Set(param.power_id),
            power_name: ActiveValue::Set(param.power_name),
            rank: ActiveValue::Set(param.rank.name().to_string()),
            combat_power: ActiveValue::Set(param.combat_power),
            draw_type: ActiveValue::Set(param.draw_type.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GachaRecord::from_entity(entity))
    }

    /// Gets a user's draw history with pagination, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of records per page
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records for the page and total record count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_user_paginated(
        &self,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<GachaRecord>, u64), DbErr> {
        let paginator = entity::prelude::GachaHistory::find()
            .filter(entity::gacha_history::Column::UserId.eq(user_id as i64))
            .order_by_desc(entity::gacha_history::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let records = entities.into_iter().map(GachaRecord::from_entity).collect();

        Ok((records, total))
    }

    /// Counts a user's history records.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_by_user(&self, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::GachaHistory::find()
            .filter(entity::gacha_history::Column::UserId.eq(user_id as i64))
            .count(self.db)
            .await
    }
}
