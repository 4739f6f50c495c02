//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs which account the bot is running as and how many guilds it can see, then sets
/// the bot's activity.
///
/// # Arguments
/// - `name` - Label of the bot, e.g. `main` or `gold`
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(name: &'static str, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} bot connected to Discord as {} in {} guilds",
        name,
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("Making families since 2018")));
}
