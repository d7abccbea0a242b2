use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: i64,
    pub name: String,
    pub coins: i64,
    pub bank_balance: i64,
    pub gacha_draws: i64,
    pub pity_counter: i32,
    pub equipped_power_id: Option<i64>,
    pub arena_rank: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_power::Entity")]
    UserPower,
    #[sea_orm(has_many = "super::gacha_history::Entity")]
    GachaHistory,
}

impl Related<super::user_power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPower.def()
    }
}

impl Related<super::gacha_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GachaHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
