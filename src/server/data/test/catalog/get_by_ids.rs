use super::*;

/// Tests batched lookup skips unknown ids.
///
/// Expected: Ok with only the existing items, ordered by id
#[tokio::test]
async fn returns_existing_items_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_planet(db).await?;
    let b = factory::create_planet(db).await?;
    factory::create_planet(db).await?;

    let items = CatalogRepository::new(db)
        .get_by_ids(CatalogKind::Planet, &[b.id, 999, a.id])
        .await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests an empty id slice does not query.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let items = CatalogRepository::new(db)
        .get_by_ids(CatalogKind::Character, &[])
        .await?;

    assert!(items.is_empty());

    Ok(())
}
