use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;
use super::m20260801_000002_create_power_table::Power;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(GachaHistory::Id).big_integer())
                    .col(big_integer(GachaHistory::UserId))
                    .col(big_integer(GachaHistory::PowerId))
                    .col(string(GachaHistory::PowerName))
                    .col(string(GachaHistory::Rank))
                    .col(big_integer(GachaHistory::CombatPower))
                    .col(string(GachaHistory::DrawType))
                    .col(timestamp_with_time_zone(GachaHistory::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gacha_history_user")
                            .from(GachaHistory::Table, GachaHistory::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gacha_history_power")
                            .from(GachaHistory::Table, GachaHistory::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GachaHistory {
    Table,
    Id,
    UserId,
    PowerId,
    PowerName,
    Rank,
    CombatPower,
    DrawType,
    CreatedAt,
}
