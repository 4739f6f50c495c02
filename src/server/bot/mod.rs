//! Discord bot integration.
//!
//! This module connects the bot to Discord and provides the pieces commands need to run
//! proposals: the `ProposalLocks` entry in the client's data map holding the shared lock
//! backend, and `SerenityTransport`, the proposal transport over the live connection.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it does not
//! block the HTTP server. A second "gold" bot can run alongside the main one; both share
//! the same lock backend so a user cannot be in a proposal on each at once.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MESSAGE_REACTIONS` - Receive the reactions that answer proposals

pub mod handler;
pub mod start;
pub mod transport;

use serenity::all::Context;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

use crate::server::service::proposal::{lock::LockBackend, ProposalCoordinator};

use self::transport::SerenityTransport;

/// Data map key for the lock backend shared by every proposal.
pub struct ProposalLocks;

impl TypeMapKey for ProposalLocks {
    type Value = Arc<dyn LockBackend>;
}

/// Builds a proposal coordinator for an event.
///
/// # Returns
/// - `Some(ProposalCoordinator)` - Coordinator using the shared locks and this event's shard
/// - `None` - The client was built without a `ProposalLocks` entry
pub async fn proposal_coordinator(ctx: &Context) -> Option<ProposalCoordinator> {
    let locks = ctx.data.read().await.get::<ProposalLocks>()?.clone();

    Some(ProposalCoordinator::new(
        locks,
        Arc::new(SerenityTransport::from_context(ctx)),
    ))
}
