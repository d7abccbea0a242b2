use super::*;

/// Tests persisting a new pity counter value.
///
/// Expected: counter stored and read back unchanged
#[tokio::test]
async fn persists_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_pity_counter(user.discord_id as u64, 73).await?;

    let profile = repo.find_by_discord_id(user.discord_id as u64).await?.unwrap();
    assert_eq!(profile.pity_counter, 73);

    Ok(())
}

/// Tests resetting the counter to zero.
///
/// Expected: counter reads back as zero
#[tokio::test]
async fn resets_counter_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .pity_counter(100)
        .build()
        .await?;
    let repo = UserRepository::new(db);

    repo.set_pity_counter(user.discord_id as u64, 0).await?;

    let profile = repo.find_by_discord_id(user.discord_id as u64).await?.unwrap();
    assert_eq!(profile.pity_counter, 0);

    Ok(())
}
