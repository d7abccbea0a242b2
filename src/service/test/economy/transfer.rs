use super::*;

/// A transfer debits the sender and credits the recipient atomically.
///
/// Expected: both wallets move by the amount and persist
#[tokio::test]
async fn transfers_between_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let winner = factory::user::UserFactory::new(db).coins(200).build().await?;
    let loser = factory::user::UserFactory::new(db).coins(500).build().await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let result = service
        .transfer_coins(loser.discord_id as u64, winner.discord_id as u64, 300)
        .await
        .unwrap();

    assert_eq!(result.from_coins, 200);
    assert_eq!(result.to_coins, 500);

    let users = UserRepository::new(db);
    assert_eq!(
        users
            .find_by_discord_id(loser.discord_id as u64)
            .await?
            .unwrap()
            .coins,
        200
    );
    assert_eq!(
        users
            .find_by_discord_id(winner.discord_id as u64)
            .await?
            .unwrap()
            .coins,
        500
    );

    Ok(())
}

/// A sender cannot transfer more than they hold.
///
/// Expected: InsufficientCoins; neither wallet changes
#[tokio::test]
async fn refuses_overdraw_transfer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::UserFactory::new(db).coins(100).build().await?;
    let recipient = factory::user::UserFactory::new(db).coins(0).build().await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let result = service
        .transfer_coins(sender.discord_id as u64, recipient.discord_id as u64, 101)
        .await;

    assert!(matches!(
        result,
        Err(AppError::EconomyErr(EconomyError::InsufficientCoins { .. }))
    ));

    let users = UserRepository::new(db);
    assert_eq!(
        users
            .find_by_discord_id(sender.discord_id as u64)
            .await?
            .unwrap()
            .coins,
        100
    );
    assert_eq!(
        users
            .find_by_discord_id(recipient.discord_id as u64)
            .await?
            .unwrap()
            .coins,
        0
    );

    Ok(())
}

/// Self-transfers and unregistered parties are rejected.
///
/// Expected: SelfTransfer / NotRegistered without mutation
#[tokio::test]
async fn rejects_self_and_unregistered_transfers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).coins(100).build().await?;
    let user_id = user.discord_id as u64;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    assert!(matches!(
        service.transfer_coins(user_id, user_id, 50).await,
        Err(AppError::EconomyErr(EconomyError::SelfTransfer))
    ));

    assert!(matches!(
        service.transfer_coins(user_id, 999999, 50).await,
        Err(AppError::EconomyErr(EconomyError::NotRegistered {
            discord_id: 999999
        }))
    ));

    assert_eq!(
        UserRepository::new(db)
            .find_by_discord_id(user_id)
            .await?
            .unwrap()
            .coins,
        100
    );

    Ok(())
}
