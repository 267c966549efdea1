use super::*;

/// Tests removing a linked item deletes only that association.
///
/// Expected: Ok(true); the other planet stays in the list
#[tokio::test]
async fn removes_linked_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let list = factory::create_favorite_list(db, user.id).await?;
    let kept = factory::create_planet(db).await?;
    let dropped = factory::create_planet(db).await?;
    factory::favorite::add_planet(db, list.id, kept.id).await?;
    factory::favorite::add_planet(db, list.id, dropped.id).await?;

    let repo = FavoriteListRepository::new(db);
    let removed = repo.remove_item(list.id, CatalogKind::Planet, dropped.id).await?;

    assert!(removed);
    let loaded = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(loaded.planets.len(), 1);
    assert_eq!(loaded.planets[0].id, kept.id);

    Ok(())
}

/// Tests removing an item that is not in the list.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_linked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let list = factory::create_favorite_list(db, user.id).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let removed = FavoriteListRepository::new(db)
        .remove_item(list.id, CatalogKind::Vehicle, vehicle.id)
        .await?;

    assert!(!removed);

    Ok(())
}
