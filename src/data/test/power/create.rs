use super::*;

/// Tests creating a catalog entry.
///
/// Expected: Ok with the entry stored under its canonical rank name
#[tokio::test]
async fn creates_catalog_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Power)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PowerRepository::new(db);
    let definition = repo
        .create(CreatePowerParam {
            name: "Beast Titan".to_string(),
            description: "Hurls boulders from beyond the wall".to_string(),
            rank: Rank::Legendary,
            base_cp: 3_000,
            base_price: 12_000,
        })
        .await
        .unwrap();

    assert!(definition.id > 0);
    assert_eq!(definition.name, "Beast Titan");
    assert_eq!(definition.rank, Rank::Legendary);

    let reread = repo.find_by_id(definition.id).await.unwrap().unwrap();
    assert_eq!(reread, definition);

    Ok(())
}
