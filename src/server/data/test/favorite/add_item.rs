use super::*;

/// Tests adding a planet writes one association row.
///
/// Expected: Ok(true) and the planet shows up in the loaded list
#[tokio::test]
async fn adds_new_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let repo = FavoriteListRepository::new(db);
    let list = repo.get_or_create(user.id).await?;

    let added = repo.add_item(list.id, CatalogKind::Planet, planet.id).await?;
    assert!(added);

    let loaded = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(loaded.planets.len(), 1);
    assert_eq!(loaded.planets[0].id, planet.id);

    Ok(())
}

/// Tests adding the same item twice does not create a duplicate association.
///
/// Expected: second call returns Ok(false) and a single join row remains
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let repo = FavoriteListRepository::new(db);
    let list = repo.get_or_create(user.id).await?;

    assert!(repo.add_item(list.id, CatalogKind::Planet, planet.id).await?);
    assert!(!repo.add_item(list.id, CatalogKind::Planet, planet.id).await?);

    assert_eq!(entity::prelude::FavoritePlanet::find().count(db).await?, 1);

    Ok(())
}

/// Tests each kind is written to its own join table.
///
/// Expected: one row in each of the three join tables
#[tokio::test]
async fn writes_to_kind_specific_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let repo = FavoriteListRepository::new(db);
    let list = repo.get_or_create(user.id).await?;

    repo.add_item(list.id, CatalogKind::Character, character.id).await?;
    repo.add_item(list.id, CatalogKind::Planet, planet.id).await?;
    repo.add_item(list.id, CatalogKind::Vehicle, vehicle.id).await?;

    assert_eq!(entity::prelude::FavoriteCharacter::find().count(db).await?, 1);
    assert_eq!(entity::prelude::FavoritePlanet::find().count(db).await?, 1);
    assert_eq!(entity::prelude::FavoriteVehicle::find().count(db).await?, 1);

    Ok(())
}

/// Tests a link committed by another writer is treated as already present.
///
/// Expected: Ok(false) instead of a primary key violation, single join row
#[tokio::test]
async fn tolerates_link_written_elsewhere() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;
    let list = factory::create_favorite_list(db, user.id).await?;
    factory::favorite::add_vehicle(db, list.id, vehicle.id).await?;

    let added = FavoriteListRepository::new(db)
        .add_item(list.id, CatalogKind::Vehicle, vehicle.id)
        .await?;

    assert!(!added);
    assert_eq!(entity::prelude::FavoriteVehicle::find().count(db).await?, 1);

    Ok(())
}
