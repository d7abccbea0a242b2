use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(big_integer(User::DiscordId).primary_key())
                    .col(string(User::Name))
                    .col(big_integer(User::Coins).default(0))
                    .col(big_integer(User::BankBalance).default(0))
                    .col(big_integer(User::GachaDraws).default(0))
                    .col(integer(User::PityCounter).default(0))
                    .col(big_integer_null(User::EquippedPowerId))
                    .col(big_integer(User::ArenaRank).default(0))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum User {
    Table,
    DiscordId,
    Name,
    Coins,
    BankBalance,
    GachaDraws,
    PityCounter,
    EquippedPowerId,
    ArenaRank,
    CreatedAt,
}
