use super::*;

/// Equipping an owned instance stores it in the profile slot.
///
/// Expected: equipped_power_id points at the instance
#[tokio::test]
async fn equips_owned_power() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Epic", 1_200).await?;
    let owned = factory::create_user_power(db, user.discord_id, power.id, 1_180).await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let equipped = service
        .equip_power(user.discord_id as u64, owned.id)
        .await
        .unwrap();

    assert_eq!(equipped.id, owned.id);

    let profile = UserRepository::new(db)
        .find_by_discord_id(user.discord_id as u64)
        .await?
        .unwrap();
    assert_eq!(profile.equipped_power_id, Some(owned.id));

    Ok(())
}

/// Equipping another user's instance is refused.
///
/// Expected: PowerNotOwned; the slot stays empty
#[tokio::test]
async fn refuses_foreign_instance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let thief = factory::create_user(db).await?;
    let power = factory::create_power(db, "Epic", 1_200).await?;
    let owned = factory::create_user_power(db, owner.discord_id, power.id, 1_180).await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let result = service.equip_power(thief.discord_id as u64, owned.id).await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::PowerNotOwned { .. }))
    ));

    let profile = UserRepository::new(db)
        .find_by_discord_id(thief.discord_id as u64)
        .await?
        .unwrap();
    assert!(profile.equipped_power_id.is_none());

    Ok(())
}

/// Unequipping clears the slot.
///
/// Expected: equipped_power_id back to None
#[tokio::test]
async fn unequips_power() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Rare", 450).await?;
    let owned = factory::create_user_power(db, user.discord_id, power.id, 460).await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    service
        .equip_power(user.discord_id as u64, owned.id)
        .await
        .unwrap();
    service.unequip_power(user.discord_id as u64).await.unwrap();

    let profile = UserRepository::new(db)
        .find_by_discord_id(user.discord_id as u64)
        .await?
        .unwrap();
    assert!(profile.equipped_power_id.is_none());

    Ok(())
}
