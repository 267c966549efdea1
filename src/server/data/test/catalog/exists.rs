use super::*;

/// Tests existence checks for present and absent ids.
///
/// Expected: true for the stored vehicle, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;

    let repo = CatalogRepository::new(db);

    assert!(repo.exists(CatalogKind::Vehicle, vehicle.id).await?);
    assert!(!repo.exists(CatalogKind::Vehicle, vehicle.id + 1).await?);

    Ok(())
}
