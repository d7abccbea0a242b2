use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub rank: String,
    pub base_cp: i64,
    pub base_price: i64,
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
