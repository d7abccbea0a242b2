use crate::data::power::PowerRepository;
use crate::error::{gacha::GachaError, AppError};
use crate::gacha::rank::Rank;
use crate::model::power::CreatePowerParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod find_by_id;
