use super::*;

/// Deposits move wallet coins into the bank.
///
/// Expected: balances move together and persist
#[tokio::test]
async fn deposit_moves_coins_into_bank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .coins(1_000)
        .bank_balance(0)
        .build()
        .await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let balances = service.deposit(user.discord_id as u64, 600).await.unwrap();

    assert_eq!(balances.coins, 400);
    assert_eq!(balances.bank_balance, 600);

    let profile = UserRepository::new(db)
        .find_by_discord_id(user.discord_id as u64)
        .await?
        .unwrap();
    assert_eq!(profile.coins, 400);
    assert_eq!(profile.bank_balance, 600);

    Ok(())
}

/// Withdrawals move bank coins back into the wallet.
///
/// Expected: balances move together and persist
#[tokio::test]
async fn withdraw_moves_coins_into_wallet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .coins(100)
        .bank_balance(900)
        .build()
        .await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    let balances = service.withdraw(user.discord_id as u64, 900).await.unwrap();

    assert_eq!(balances.coins, 1_000);
    assert_eq!(balances.bank_balance, 0);

    Ok(())
}

/// Insufficient funds fail closed with the exact shortfall.
///
/// Expected: InsufficientCoins / InsufficientBank with correct shortfalls and
/// no mutation
#[tokio::test]
async fn insufficient_funds_fail_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .coins(300)
        .bank_balance(50)
        .build()
        .await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    match service.deposit(user.discord_id as u64, 301).await {
        Err(AppError::EconomyErr(err @ EconomyError::InsufficientCoins { .. })) => {
            assert_eq!(err.shortfall(), Some(1));
        }
        other => panic!("expected InsufficientCoins, got {:?}", other),
    }

    match service.withdraw(user.discord_id as u64, 200).await {
        Err(AppError::EconomyErr(err @ EconomyError::InsufficientBank { .. })) => {
            assert_eq!(err.shortfall(), Some(150));
        }
        other => panic!("expected InsufficientBank, got {:?}", other),
    }

    let profile = UserRepository::new(db)
        .find_by_discord_id(user.discord_id as u64)
        .await?
        .unwrap();
    assert_eq!(profile.coins, 300);
    assert_eq!(profile.bank_balance, 50);

    Ok(())
}

/// Non-positive amounts are rejected before any lock or read.
///
/// Expected: InvalidAmount for 0 and negative amounts
#[tokio::test]
async fn rejects_non_positive_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let locks = KeyedMutex::new();
    let table = RankTable::default();
    let service = EconomyService::new(db, &locks, &table);

    for amount in [0, -5] {
        assert!(matches!(
            service.deposit(user.discord_id as u64, amount).await,
            Err(AppError::EconomyErr(EconomyError::InvalidAmount { .. }))
        ));
        assert!(matches!(
            service.withdraw(user.discord_id as u64, amount).await,
            Err(AppError::EconomyErr(EconomyError::InvalidAmount { .. }))
        ));
    }

    Ok(())
}
