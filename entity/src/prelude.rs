pub use super::gacha_history::Entity as GachaHistory;
pub use super::power::Entity as Power;
pub use super::user::Entity as User;
pub use super::user_power::Entity as UserPower;
