use super::*;

/// Registration grants the starting balances and the next ladder position.
///
/// Expected: profile created with STARTING_COINS, STARTING_DRAWS, pity 0, and
/// arena rank one past the player count
#[tokio::test]
async fn registers_with_starting_grants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let profile = service.register(555, "Armin".to_string()).await.unwrap();

    assert_eq!(profile.discord_id, 555);
    assert_eq!(profile.name, "Armin");
    assert_eq!(profile.coins, STARTING_COINS);
    assert_eq!(profile.gacha_draws, STARTING_DRAWS);
    assert_eq!(profile.pity_counter, 0);
    assert_eq!(profile.arena_rank, 3);

    Ok(())
}

/// Registering twice is rejected.
///
/// Expected: Err(AlreadyRegistered) and the original profile untouched
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    service.register(555, "Armin".to_string()).await.unwrap();
    let result = service.register(555, "Imposter".to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::AlreadyRegistered {
            discord_id: 555
        }))
    ));

    let profile = UserRepository::new(db).find_by_discord_id(555).await?.unwrap();
    assert_eq!(profile.name, "Armin");

    Ok(())
}
