use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::data::user::UserRepository;
use crate::error::{economy::EconomyError, AppError};
use crate::gacha::rank::RankTable;
use crate::service::economy::{EconomyService, STARTING_COINS, STARTING_DRAWS};
use crate::sync::keyed_mutex::KeyedMutex;

mod bank;
mod equip;
mod register;
mod transfer;
