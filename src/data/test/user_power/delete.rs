use super::*;

/// Tests deleting an owned instance (consumption).
///
/// Expected: Ok(true), then the instance no longer exists
#[tokio::test]
async fn deletes_existing_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Normal", 150).await?;
    let owned = factory::create_user_power(db, user.discord_id, power.id, 150).await?;

    let repo = UserPowerRepository::new(db);

    assert!(repo.delete(owned.id).await?);
    assert!(repo.find_by_id(owned.id).await?.is_none());

    Ok(())
}

/// Tests deleting a non-existent instance.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserPowerRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}
