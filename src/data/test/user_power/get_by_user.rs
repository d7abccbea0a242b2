use super::*;

/// Tests fetching a user's collection with definitions, strongest first.
///
/// Expected: instances paired with their definitions, descending CP
#[tokio::test]
async fn fetches_collection_with_definitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let weak = factory::create_power(db, "Normal", 150).await?;
    let strong = factory::create_power(db, "Epic", 1_200).await?;

    factory::create_user_power(db, user.discord_id, weak.id, 145).await?;
    factory::create_user_power(db, user.discord_id, strong.id, 1_260).await?;

    let repo = UserPowerRepository::new(db);
    let collection = repo.get_by_user(user.discord_id as u64).await.unwrap();

    assert_eq!(collection.len(), 2);
    assert_eq!(collection[0].0.combat_power, 1_260);
    assert_eq!(collection[0].1.id, strong.id);
    assert_eq!(collection[1].0.combat_power, 145);
    assert_eq!(collection[1].1.id, weak.id);

    Ok(())
}

/// Tests that a user with no instances gets an empty collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_user_without_powers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserPowerRepository::new(db);
    let collection = repo.get_by_user(user.discord_id as u64).await.unwrap();

    assert!(collection.is_empty());

    Ok(())
}
