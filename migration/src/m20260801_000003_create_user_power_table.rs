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
                    .table(UserPower::Table)
                    .if_not_exists()
                    .col(pk_auto(UserPower::Id).big_integer())
                    .col(big_integer(UserPower::UserId))
                    .col(big_integer(UserPower::PowerId))
                    .col(big_integer(UserPower::CombatPower))
                    .col(timestamp_with_time_zone(UserPower::ObtainedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_power_user")
                            .from(UserPower::Table, UserPower::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_power_power")
                            .from(UserPower::Table, UserPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPower::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserPower {
    Table,
    Id,
    UserId,
    PowerId,
    CombatPower,
    ObtainedAt,
}
