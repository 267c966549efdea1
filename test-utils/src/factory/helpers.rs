//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (emails, names) from colliding when a test creates
/// several entities with default values.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user whose favorite list holds one character, one planet and one vehicle.
///
/// # Returns
/// - `Ok((user, list, character, planet, vehicle))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorites(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::favorite_list::Model,
        entity::character::Model,
        entity::planet::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let list = crate::factory::favorite::create_favorite_list(db, user.id).await?;
    let character = crate::factory::character::create_character(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;

    crate::factory::favorite::add_character(db, list.id, character.id).await?;
    crate::factory::favorite::add_planet(db, list.id, planet.id).await?;
    crate::factory::favorite::add_vehicle(db, list.id, vehicle.id).await?;

    Ok((user, list, character, planet, vehicle))
}
