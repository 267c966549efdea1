use super::*;

/// Tests a list is created for a user that has none.
///
/// Expected: Ok with a new list owned by the user
#[tokio::test]
async fn creates_list_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let list = FavoriteListRepository::new(db).get_or_create(user.id).await?;

    assert_eq!(list.user_id, user.id);
    assert_eq!(entity::prelude::FavoriteList::find().count(db).await?, 1);

    Ok(())
}

/// Tests the existing list is reused instead of creating a second one.
///
/// Expected: Ok with the same list id and still a single row
#[tokio::test]
async fn reuses_existing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_favorite_list(db, user.id).await?;

    let list = FavoriteListRepository::new(db).get_or_create(user.id).await?;

    assert_eq!(list.id, existing.id);
    assert_eq!(entity::prelude::FavoriteList::find().count(db).await?, 1);

    Ok(())
}

/// Tests repeated calls converge on one list.
///
/// Expected: Ok with the same id both times and no unique constraint error
#[tokio::test]
async fn repeated_calls_return_same_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = FavoriteListRepository::new(db);

    let first = repo.get_or_create(user.id).await?;
    let second = repo.get_or_create(user.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::FavoriteList::find().count(db).await?, 1);

    Ok(())
}

