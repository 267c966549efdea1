use super::*;

/// Tests lists are keyed by their owner and users without lists are skipped.
///
/// Expected: Ok with entries only for users that own a list
#[tokio::test]
async fn keys_lists_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, list, character, _, _) = factory::helpers::create_user_with_favorites(db).await?;
    let without_list = factory::create_user(db).await?;

    let lists = FavoriteListRepository::new(db)
        .get_by_user_ids(&[owner.id, without_list.id])
        .await?;

    assert_eq!(lists.len(), 1);
    let loaded = &lists[&owner.id];
    assert_eq!(loaded.id, list.id);
    assert_eq!(loaded.characters[0].id, character.id);

    Ok(())
}

/// Tests the same item favorited by two users appears in both lists.
///
/// Expected: Ok with the shared vehicle in each list
#[tokio::test]
async fn shares_items_between_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let first_list = factory::create_favorite_list(db, first.id).await?;
    let second_list = factory::create_favorite_list(db, second.id).await?;
    let vehicle = factory::create_vehicle(db).await?;
    factory::favorite::add_vehicle(db, first_list.id, vehicle.id).await?;
    factory::favorite::add_vehicle(db, second_list.id, vehicle.id).await?;

    let lists = FavoriteListRepository::new(db)
        .get_by_user_ids(&[first.id, second.id])
        .await?;

    assert_eq!(lists[&first.id].vehicles[0].id, vehicle.id);
    assert_eq!(lists[&second.id].vehicles[0].id, vehicle.id);

    Ok(())
}

/// Tests an empty id slice.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lists = FavoriteListRepository::new(db).get_by_user_ids(&[]).await?;

    assert!(lists.is_empty());

    Ok(())
}
