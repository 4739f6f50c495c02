use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::server::{error::AppError, service::proposal::lock::LockBackend};

use super::{handler::Handler, ProposalLocks};

/// Builds a Discord client for one bot token.
///
/// The client is configured with the intents proposals need and carries the shared lock
/// backend in its data map. It is not connected until `start_bot` runs.
///
/// # Arguments
/// - `token` - Discord bot token
/// - `name` - Label used in logs to tell the bots apart
/// - `locks` - Lock backend shared by every bot in this process
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Invalid token or client construction failure
pub async fn init_bot(
    token: &str,
    name: &'static str,
    locks: Arc<dyn LockBackend>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    tracing::info!("Logging in {} bot", name);

    let client = Client::builder(token, intents)
        .event_handler(Handler::new(name))
        .type_map_insert::<ProposalLocks>(locks)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it will block until the bot
/// shuts down.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if connecting to the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await?;

    Ok(())
}
