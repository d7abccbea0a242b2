mod gacha_history;
mod power;
mod user;
mod user_power;
