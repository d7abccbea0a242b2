use super::*;

/// Tests finding a catalog entry by id.
///
/// Expected: Ok(Some(PowerDefinition)) with matching data
#[tokio::test]
async fn finds_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Power)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let power = factory::create_power(db, "Legendary", 3_000).await?;

    let repo = PowerRepository::new(db);
    let definition = repo.find_by_id(power.id).await.unwrap();

    assert!(definition.is_some());
    let definition = definition.unwrap();
    assert_eq!(definition.id, power.id);
    assert_eq!(definition.rank, Rank::Legendary);
    assert_eq!(definition.base_cp, 3_000);

    Ok(())
}

/// Tests querying for a non-existent entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Power)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PowerRepository::new(db);
    let result = repo.find_by_id(999).await.unwrap();

    assert!(result.is_none());

    Ok(())
}
