use super::*;

/// Tests finding an existing user without favorites.
///
/// Expected: Ok(Some) with email and no favorites
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("rey@jakku.org")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("user should exist");

    assert_eq!(user.email, "rey@jakku.org");
    assert!(user.favorites.is_none());

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests an empty favorite list loads as an empty list rather than none.
///
/// Expected: Ok(Some) with favorites present and every collection empty
#[tokio::test]
async fn loads_empty_favorite_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    factory::create_favorite_list(db, created.id).await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?.unwrap();
    let favorites = user.favorites.expect("favorites should load");

    assert!(favorites.characters.is_empty());
    assert!(favorites.planets.is_empty());
    assert!(favorites.vehicles.is_empty());

    Ok(())
}
