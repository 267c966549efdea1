pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_favorite_list_table;
mod m20260101_000003_create_character_table;
mod m20260101_000004_create_planet_table;
mod m20260101_000005_create_vehicle_table;
mod m20260101_000006_create_favorite_character_table;
mod m20260101_000007_create_favorite_planet_table;
mod m20260101_000008_create_favorite_vehicle_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_favorite_list_table::Migration),
            Box::new(m20260101_000003_create_character_table::Migration),
            Box::new(m20260101_000004_create_planet_table::Migration),
            Box::new(m20260101_000005_create_vehicle_table::Migration),
            Box::new(m20260101_000006_create_favorite_character_table::Migration),
            Box::new(m20260101_000007_create_favorite_planet_table::Migration),
            Box::new(m20260101_000008_create_favorite_vehicle_table::Migration),
        ]
    }
}
