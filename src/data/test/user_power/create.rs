use super::*;

/// Tests creating an owned instance.
///
/// Expected: Ok with owner, definition reference, and CP stored
#[tokio::test]
async fn creates_owned_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Rare", 450).await?;

    let repo = UserPowerRepository::new(db);
    let owned = repo
        .create(CreateUserPowerParam {
            user_id: user.discord_id as u64,
            power_id: power.id,
            combat_power: 472,
        })
        .await?;

    assert!(owned.id > 0);
    assert_eq!(owned.user_id, user.discord_id as u64);
    assert_eq!(owned.power_id, power.id);
    assert_eq!(owned.combat_power, 472);

    Ok(())
}

/// Tests counting a user's instances.
///
/// Expected: count reflects only the owning user's instances
#[tokio::test]
async fn counts_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let power = factory::create_power(db, "Normal", 150).await?;

    factory::create_user_power(db, owner.discord_id, power.id, 150).await?;
    factory::create_user_power(db, owner.discord_id, power.id, 160).await?;
    factory::create_user_power(db, other.discord_id, power.id, 140).await?;

    let repo = UserPowerRepository::new(db);

    assert_eq!(repo.count_by_user(owner.discord_id as u64).await?, 2);
    assert_eq!(repo.count_by_user(other.discord_id as u64).await?, 1);

    Ok(())
}
