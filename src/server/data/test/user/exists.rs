use super::*;

/// Tests existence checks for present and absent users.
///
/// Expected: true for the stored user, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.exists(user.id).await?);
    assert!(!repo.exists(user.id + 100).await?);

    Ok(())
}
