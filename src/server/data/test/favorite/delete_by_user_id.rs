use super::*;

/// Tests deleting a list removes its join rows but not the catalog items.
///
/// Expected: Ok(true); list and associations gone
#[tokio::test]
async fn deletes_list_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _, _) = factory::helpers::create_user_with_favorites(db).await?;

    let repo = FavoriteListRepository::new(db);
    assert!(repo.delete_by_user_id(user.id).await?);

    assert!(repo.find_by_user_id(user.id).await?.is_none());
    assert_eq!(entity::prelude::FavoriteCharacter::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FavoritePlanet::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FavoriteVehicle::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Character::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting for a user with no list.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(!FavoriteListRepository::new(db).delete_by_user_id(user.id).await?);

    Ok(())
}
