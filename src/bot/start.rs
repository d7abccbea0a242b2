use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Initializes the Discord bot client.
///
/// Builds a serenity client with the gateway intents the bot needs and attaches
/// the event handler holding the shared application state.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared application state for the event handler
///
/// # Returns
/// - `Ok(Client)` - Initialized client ready to start
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler { state })
        .await?;

    Ok(client)
}

/// Starts the Discord bot and blocks until it disconnects.
///
/// # Arguments
/// - `client` - Initialized client from `init_bot`
///
/// # Returns
/// - `Ok(())` - Client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await?;
    Ok(())
}
