//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::create_planet(&db).await?;
//! let list = factory::create_favorite_list(&db, user.id).await?;
//! factory::favorite::add_planet(&db, list.id, planet.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("luke@tatooine.org")
//!     .password("hunter2")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use favorite::create_favorite_list;
pub use planet::create_planet;
pub use user::create_user;
pub use vehicle::create_vehicle;
