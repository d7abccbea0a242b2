use crate::data::user_power::UserPowerRepository;
use crate::model::power::CreateUserPowerParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;
mod get_by_user;
