use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Label of the bot this handler serves, for logs.
    pub name: &'static str,
}

impl Handler {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.name, ctx, ready).await;
    }
}
