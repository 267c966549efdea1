use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector for every kind
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    for kind in CatalogKind::ALL {
        assert!(repo.get_all(kind).await?.is_empty());
    }

    Ok(())
}

/// Tests that the list length matches the stored row count and only includes the
/// requested kind.
///
/// Expected: Ok with one entry per stored row of that kind
#[tokio::test]
async fn returns_all_rows_of_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db).await?;
    factory::create_character(db).await?;
    factory::create_character(db).await?;
    factory::create_planet(db).await?;

    let repo = CatalogRepository::new(db);

    assert_eq!(repo.get_all(CatalogKind::Character).await?.len(), 3);
    assert_eq!(repo.get_all(CatalogKind::Planet).await?.len(), 1);
    assert!(repo.get_all(CatalogKind::Vehicle).await?.is_empty());

    Ok(())
}

/// Tests rows are returned in insertion order.
///
/// Expected: Ok with items ordered by id
#[tokio::test]
async fn returns_rows_in_storage_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::vehicle::VehicleFactory::new(db)
        .name("TIE Fighter")
        .build()
        .await?;
    let second = factory::vehicle::VehicleFactory::new(db)
        .name("AT-AT")
        .build()
        .await?;

    let items = CatalogRepository::new(db)
        .get_all(CatalogKind::Vehicle)
        .await?;

    assert_eq!(items[0].id, first.id);
    assert_eq!(items[1].id, second.id);

    Ok(())
}
