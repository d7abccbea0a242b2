//! Prefix-command dispatch.
//!
//! Thin plumbing between chat messages and the service layer: parse the
//! command word, call the matching service operation, and relay the outcome
//! as plain text. Domain errors render their own messages (they carry the
//! exact shortfalls); infrastructure errors are logged and masked.

use serenity::all::{Context, Message};

use crate::{
    error::AppError,
    model::gacha::DrawType,
    service::{economy::EconomyService, gacha::GachaService},
    state::AppState,
};

/// Routes a chat message to the matching service operation, if any.
pub async fn dispatch(state: &AppState, ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }
    let Some(rest) = msg.content.strip_prefix('!') else {
        return;
    };
    let mut parts = rest.split_whitespace();
    let Some(command) = parts.next() else {
        return;
    };

    let outcome = match command {
        "register" => register(state, msg).await,
        "draw" => draw(state, msg, 1).await,
        "draw10" => draw(state, msg, 10).await,
        "buydraws" => buy_draws(state, msg, parts.next()).await,
        "deposit" => deposit(state, msg, parts.next()).await,
        "withdraw" => withdraw(state, msg, parts.next()).await,
        "equip" => equip(state, msg, parts.next()).await,
        "unequip" => unequip(state, msg).await,
        "buy" => buy_power(state, msg, parts.next()).await,
        "history" => history(state, msg).await,
        "collection" => collection(state, msg).await,
        _ => return,
    };

    let text = match outcome {
        Ok(text) => text,
        Err(AppError::GachaErr(err)) => err.to_string(),
        Err(AppError::EconomyErr(err)) => err.to_string(),
        Err(err) => {
            tracing::error!("Command '{}' failed: {:?}", command, err);
            "Something went wrong.".to_string()
        }
    };

    if let Err(e) = msg.channel_id.say(&ctx.http, text).await {
        tracing::error!("Failed to send command reply: {:?}", e);
    }
}

fn parse_amount(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|raw| raw.parse().ok())
}

async fn register(state: &AppState, msg: &Message) -> Result<String, AppError> {
    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    let profile = service
        .register(msg.author.id.get(), msg.author.name.clone())
        .await?;

    Ok(format!(
        "Welcome to the Corps, {}! You start with {} coins and {} draws.",
        profile.name, profile.coins, profile.gacha_draws
    ))
}

async fn draw(state: &AppState, msg: &Message, count: u32) -> Result<String, AppError> {
    let mut service = GachaService::new(&state.db, &state.locks, &state.ranks);
    let batch = service
        .perform_batch_draw(msg.author.id.get(), count, DrawType::Free)
        .await?;

    let mut lines = Vec::with_capacity(batch.draws.len() + 1);
    for result in &batch.draws {
        let config = state.ranks.config(result.rank);
        lines.push(format!(
            "{} {} [{}] {} CP{}",
            config.emoji,
            result.power.name,
            result.rank,
            result.combat_power,
            if result.pity_triggered { " (pity!)" } else { "" }
        ));
    }
    lines.push(format!("Draws left: {}", batch.remaining_draws));

    Ok(lines.join("\n"))
}

async fn buy_draws(state: &AppState, msg: &Message, arg: Option<&str>) -> Result<String, AppError> {
    let Some(amount) = arg.and_then(|raw| raw.parse::<u32>().ok()) else {
        return Ok("Usage: !buydraws <amount>".to_string());
    };

    let service = GachaService::new(&state.db, &state.locks, &state.ranks);
    let purchase = service.purchase_draws(msg.author.id.get(), amount).await?;

    Ok(format!(
        "Bought {} draws for {} coins. You now have {} draws and {} coins.",
        purchase.purchased, purchase.cost, purchase.total_draws, purchase.remaining_coins
    ))
}

async fn deposit(state: &AppState, msg: &Message, arg: Option<&str>) -> Result<String, AppError> {
    let Some(amount) = parse_amount(arg) else {
        return Ok("Usage: !deposit <amount>".to_string());
    };

    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    let balances = service.deposit(msg.author.id.get(), amount).await?;

    Ok(format!(
        "Deposited. Wallet: {} coins, bank: {} coins.",
        balances.coins, balances.bank_balance
    ))
}

async fn withdraw(state: &AppState, msg: &Message, arg: Option<&str>) -> Result<String, AppError> {
    let Some(amount) = parse_amount(arg) else {
        return Ok("Usage: !withdraw <amount>".to_string());
    };

    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    let balances = service.withdraw(msg.author.id.get(), amount).await?;

    Ok(format!(
        "Withdrawn. Wallet: {} coins, bank: {} coins.",
        balances.coins, balances.bank_balance
    ))
}

async fn equip(state: &AppState, msg: &Message, arg: Option<&str>) -> Result<String, AppError> {
    let Some(user_power_id) = parse_amount(arg) else {
        return Ok("Usage: !equip <power instance id>".to_string());
    };

    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    let owned = service.equip_power(msg.author.id.get(), user_power_id).await?;
    let rank = state.ranks.resolve(owned.combat_power);

    Ok(format!(
        "Equipped instance #{} [{}] at {} CP.",
        owned.id, rank, owned.combat_power
    ))
}

async fn unequip(state: &AppState, msg: &Message) -> Result<String, AppError> {
    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    service.unequip_power(msg.author.id.get()).await?;

    Ok("Unequipped.".to_string())
}

async fn buy_power(state: &AppState, msg: &Message, arg: Option<&str>) -> Result<String, AppError> {
    let Some(power_id) = parse_amount(arg) else {
        return Ok("Usage: !buy <power id>".to_string());
    };

    let service = EconomyService::new(&state.db, &state.locks, &state.ranks);
    let owned = service.purchase_power(msg.author.id.get(), power_id).await?;
    let rank = state.ranks.resolve(owned.combat_power);

    Ok(format!(
        "Purchased instance #{} [{}] at {} CP.",
        owned.id, rank, owned.combat_power
    ))
}

async fn history(state: &AppState, msg: &Message) -> Result<String, AppError> {
    let service = GachaService::new(&state.db, &state.locks, &state.ranks);
    let page = service.history(msg.author.id.get(), 0, 10).await?;

    if page.records.is_empty() {
        return Ok("No draws yet.".to_string());
    }

    let mut lines = Vec::with_capacity(page.records.len() + 1);
    lines.push(format!("Last {} of {} draws:", page.records.len(), page.total));
    for record in &page.records {
        lines.push(format!(
            "{} [{}] {} CP ({})",
            record.power_name, record.rank, record.combat_power, record.draw_type
        ));
    }

    Ok(lines.join("\n"))
}

async fn collection(state: &AppState, msg: &Message) -> Result<String, AppError> {
    let repo = crate::data::user_power::UserPowerRepository::new(&state.db);
    let collection = repo.get_by_user(msg.author.id.get()).await?;

    if collection.is_empty() {
        return Ok("You own no powers yet.".to_string());
    }

    let mut lines = Vec::with_capacity(collection.len());
    for (instance, definition) in &collection {
        let rank = state.ranks.resolve(instance.combat_power);
        let config = state.ranks.config(rank);
        lines.push(format!(
            "#{} {} {} [{}] {} CP",
            instance.id, config.emoji, definition.name, rank, instance.combat_power
        ));
    }

    Ok(lines.join("\n"))
}
