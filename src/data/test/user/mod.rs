use crate::data::user::UserRepository;
use crate::model::user::RegisterProfileParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod set_equipped_power;
mod set_pity_counter;
