use super::*;

/// Tests pagination over a user's history, newest first.
///
/// Expected: pages slice the records in descending id order with the right total
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let power = factory::create_power(db, "Normal", 150).await?;

    let repo = GachaHistoryRepository::new(db);
    for index in 0..5 {
        repo.append(AppendHistoryParam {
            user_id: user.discord_id as u64,
            power_id: power.id,
            power_name: format!("Draw {}", index),
            rank: Rank::Normal,
            combat_power: 150 + index,
            draw_type: DrawType::Free,
        })
        .await?;
    }

    let (first_page, total) = repo
        .get_by_user_paginated(user.discord_id as u64, 0, 2)
        .await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].power_name, "Draw 4");
    assert_eq!(first_page[1].power_name, "Draw 3");

    let (last_page, _) = repo
        .get_by_user_paginated(user.discord_id as u64, 2, 2)
        .await?;
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].power_name, "Draw 0");

    Ok(())
}
