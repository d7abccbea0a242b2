use super::*;

/// Tests equipping and unequipping a power instance.
///
/// Expected: the slot stores the instance id, then clears to None
#[tokio::test]
async fn sets_and_clears_equipped_power() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Epic", 1_200).await?;
    let owned = factory::create_user_power(db, user.discord_id, power.id, 1_150).await?;

    let repo = UserRepository::new(db);

    repo.set_equipped_power(user.discord_id as u64, Some(owned.id))
        .await?;
    let profile = repo.find_by_discord_id(user.discord_id as u64).await?.unwrap();
    assert_eq!(profile.equipped_power_id, Some(owned.id));

    repo.set_equipped_power(user.discord_id as u64, None).await?;
    let profile = repo.find_by_discord_id(user.discord_id as u64).await?.unwrap();
    assert!(profile.equipped_power_id.is_none());

    Ok(())
}

/// Tests setting the arena ladder position.
///
/// Expected: position stored and read back unchanged
#[tokio::test]
async fn sets_arena_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_arena_rank(user.discord_id as u64, 7).await?;

    let profile = repo.find_by_discord_id(user.discord_id as u64).await?.unwrap();
    assert_eq!(profile.arena_rank, 7);

    Ok(())
}
