use super::*;

/// Tests creating a new profile with registration grants.
///
/// Verifies that the repository creates a profile with the supplied starting
/// coins, draws, and arena rank, and zeroed bank/pity/equip fields.
///
/// Expected: Ok with all fields as registered
#[tokio::test]
async fn creates_new_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let profile = repo
        .create(RegisterProfileParam {
            discord_id: 123456789,
            name: "Eren".to_string(),
            coins: 1_000,
            gacha_draws: 5,
            arena_rank: 1,
        })
        .await?;

    assert_eq!(profile.discord_id, 123456789);
    assert_eq!(profile.name, "Eren");
    assert_eq!(profile.coins, 1_000);
    assert_eq!(profile.bank_balance, 0);
    assert_eq!(profile.gacha_draws, 5);
    assert_eq!(profile.pity_counter, 0);
    assert!(profile.equipped_power_id.is_none());
    assert_eq!(profile.arena_rank, 1);

    Ok(())
}

/// Tests that a duplicate Discord ID is rejected by the primary key.
///
/// Expected: Err on the second insert with the same id
#[tokio::test]
async fn rejects_duplicate_discord_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = RegisterProfileParam {
        discord_id: 123456789,
        name: "Eren".to_string(),
        coins: 1_000,
        gacha_draws: 5,
        arena_rank: 1,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests counting profiles.
///
/// Expected: count matches the number of created users
#[tokio::test]
async fn counts_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
