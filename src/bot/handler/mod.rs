pub mod message;

use serenity::all::{ActivityData, Context, EventHandler, Guild, Message, Ready};
use serenity::async_trait;

use crate::state::AppState;

/// Discord bot event handler.
pub struct Handler {
    pub state: AppState,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("Rumbling beyond the walls")));
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        tracing::debug!(
            "Guild create event: {} ({}) - member_count: {}",
            guild.name,
            guild.id.get(),
            guild.member_count
        );
    }

    /// Called for every message the bot can see
    async fn message(&self, ctx: Context, msg: Message) {
        message::dispatch(&self.state, &ctx, &msg).await;
    }
}
