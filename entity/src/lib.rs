//! SeaORM entities for the holonet schema.
//!
//! `user` owns at most one `favorite_list`; a favorite list references characters,
//! planets and vehicles through the three `favorite_*` join tables.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_list;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod planet;
pub mod user;
pub mod vehicle;
