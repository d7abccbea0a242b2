//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let catalog = factory::helpers::create_default_catalog(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id(987654321)
//!     .coins(100_000)
//!     .gacha_draws(10)
//!     .pity_counter(99)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user profile entities
//! - `power` - Create power catalog entities
//! - `user_power` - Create owned power instances
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod power;
pub mod user;
pub mod user_power;

// Re-export commonly used factory functions for concise usage
pub use helpers::create_default_catalog;
pub use power::create_power;
pub use user::{create_user, create_user_with_id};
pub use user_power::create_user_power;
