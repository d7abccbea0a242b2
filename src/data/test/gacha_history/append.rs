use super::*;

/// Tests appending a completed draw to the log.
///
/// Expected: Ok with the snapshot fields stored as given
#[tokio::test]
async fn appends_draw_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Mythic", 6_000).await?;

    let repo = GachaHistoryRepository::new(db);
    let record = repo
        .append(AppendHistoryParam {
            user_id: user.discord_id as u64,
            power_id: power.id,
            power_name: "Founding Titan".to_string(),
            rank: Rank::Mythic,
            combat_power: 5_940,
            draw_type: DrawType::Paid,
        })
        .await?;

    assert!(record.id > 0);
    assert_eq!(record.user_id, user.discord_id as u64);
    assert_eq!(record.power_name, "Founding Titan");
    assert_eq!(record.rank, "Mythic");
    assert_eq!(record.combat_power, 5_940);
    assert_eq!(record.draw_type, "paid");

    Ok(())
}

/// Tests counting a user's records.
///
/// Expected: count reflects only that user's draws
#[tokio::test]
async fn counts_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drawer = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let power = factory::create_power(db, "Normal", 150).await?;

    let repo = GachaHistoryRepository::new(db);
    for _ in 0..3 {
        repo.append(AppendHistoryParam {
            user_id: drawer.discord_id as u64,
            power_id: power.id,
            power_name: power.name.clone(),
            rank: Rank::Normal,
            combat_power: 150,
            draw_type: DrawType::Free,
        })
        .await?;
    }

    assert_eq!(repo.count_by_user(drawer.discord_id as u64).await?, 3);
    assert_eq!(repo.count_by_user(other.discord_id as u64).await?, 0);

    Ok(())
}
