pub use super::character::Entity as Character;
pub use super::favorite_character::Entity as FavoriteCharacter;
pub use super::favorite_list::Entity as FavoriteList;
pub use super::favorite_planet::Entity as FavoritePlanet;
pub use super::favorite_vehicle::Entity as FavoriteVehicle;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
