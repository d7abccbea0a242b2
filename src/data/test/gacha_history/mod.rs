use crate::data::gacha_history::GachaHistoryRepository;
use crate::gacha::rank::Rank;
use crate::model::gacha::{AppendHistoryParam, DrawType};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod append;
mod get_by_user_paginated;
