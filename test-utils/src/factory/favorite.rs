//! Factories for favorite lists and their join-table rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty favorite list owned by `user_id`.
pub async fn create_favorite_list(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::favorite_list::Model, DbErr> {
    entity::favorite_list::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a character to a favorite list.
pub async fn add_character(
    db: &DatabaseConnection,
    favoritelist_id: i32,
    character_id: i32,
) -> Result<entity::favorite_character::Model, DbErr> {
    entity::favorite_character::ActiveModel {
        favoritelist_id: ActiveValue::Set(favoritelist_id),
        character_id: ActiveValue::Set(character_id),
    }
    .insert(db)
    .await
}

/// Links a planet to a favorite list.
pub async fn add_planet(
    db: &DatabaseConnection,
    favoritelist_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        favoritelist_id: ActiveValue::Set(favoritelist_id),
        planet_id: ActiveValue::Set(planet_id),
    }
    .insert(db)
    .await
}

/// Links a vehicle to a favorite list.
pub async fn add_vehicle(
    db: &DatabaseConnection,
    favoritelist_id: i32,
    vehicle_id: i32,
) -> Result<entity::favorite_vehicle::Model, DbErr> {
    entity::favorite_vehicle::ActiveModel {
        favoritelist_id: ActiveValue::Set(favoritelist_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
    }
    .insert(db)
    .await
}
