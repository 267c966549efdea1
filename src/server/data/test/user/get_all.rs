use super::*;

/// Tests listing users with an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests every user is returned in storage order, with favorites only where a list exists.
///
/// Expected: Ok with one entry per stored user
#[tokio::test]
async fn returns_users_with_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::create_user(db).await?;
    let (fan, list, character, planet, vehicle) =
        factory::helpers::create_user_with_favorites(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, plain.id);
    assert!(users[0].favorites.is_none());

    assert_eq!(users[1].id, fan.id);
    let favorites = users[1].favorites.as_ref().expect("favorites should load");
    assert_eq!(favorites.id, list.id);
    assert_eq!(favorites.characters[0].id, character.id);
    assert_eq!(favorites.planets[0].id, planet.id);
    assert_eq!(favorites.vehicles[0].id, vehicle.id);

    Ok(())
}

/// Tests that favorites of different users are not mixed together.
///
/// Expected: Ok with each list only holding its own planets
#[tokio::test]
async fn keeps_favorites_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let first_list = factory::create_favorite_list(db, first.id).await?;
    let second_list = factory::create_favorite_list(db, second.id).await?;

    let shared = factory::create_planet(db).await?;
    let only_second = factory::create_planet(db).await?;
    factory::favorite::add_planet(db, first_list.id, shared.id).await?;
    factory::favorite::add_planet(db, second_list.id, shared.id).await?;
    factory::favorite::add_planet(db, second_list.id, only_second.id).await?;

    let users = UserRepository::new(db).get_all().await?;

    let first_planets = &users[0].favorites.as_ref().unwrap().planets;
    let second_planets = &users[1].favorites.as_ref().unwrap().planets;
    assert_eq!(first_planets.len(), 1);
    assert_eq!(second_planets.len(), 2);
    assert_eq!(second_planets[1].id, only_second.id);

    Ok(())
}
