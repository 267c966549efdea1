use super::*;

/// Tests fetching an existing character.
///
/// Expected: Ok(Some) with fields matching the stored row exactly
#[tokio::test]
async fn returns_matching_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .description("Farm boy from Tatooine")
        .build()
        .await?;

    let item = CatalogRepository::new(db)
        .get_by_id(CatalogKind::Character, character.id)
        .await?
        .expect("character should exist");

    assert_eq!(item.id, character.id);
    assert_eq!(item.name, "Luke Skywalker");
    assert_eq!(item.description, "Farm boy from Tatooine");

    Ok(())
}

/// Tests fetching an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CatalogRepository::new(db)
        .get_by_id(CatalogKind::Character, 999)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that ids are scoped to their own table.
///
/// Expected: Ok(None) when looking up a planet id as a vehicle
#[tokio::test]
async fn does_not_cross_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = CatalogRepository::new(db);

    assert!(repo.get_by_id(CatalogKind::Planet, planet.id).await?.is_some());
    assert!(repo.get_by_id(CatalogKind::Vehicle, planet.id).await?.is_none());

    Ok(())
}
