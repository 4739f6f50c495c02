//! Chat transport abstraction used by the proposal flow.
//!
//! The coordinator never talks to Discord directly; it goes through `ProposalTransport`
//! so the flow can run against `SerenityTransport` in production and a scripted mock
//! in tests.

use serenity::all::{ChannelId, MessageId, UserId};
use serenity::async_trait;
use std::time::Duration;

use crate::server::{error::transport::TransportError, model::marker::MarkerEvent};

/// Predicate deciding whether an observed reaction ends the wait.
pub type MarkerFilter = Box<dyn Fn(&MarkerEvent) -> bool + Send + Sync>;

/// Which users a sent message is allowed to ping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionPolicy {
    /// Whatever the chat platform does by default.
    Default,
    /// Only the given user may be pinged, even if others are mentioned.
    Only(UserId),
}

#[async_trait]
pub trait ProposalTransport: Send + Sync {
    /// Sends a message and returns its ID.
    async fn send(
        &self,
        channel_id: ChannelId,
        content: &str,
        mentions: MentionPolicy,
    ) -> Result<MessageId, TransportError>;

    /// Replaces a message's content and removes its embeds.
    async fn edit(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), TransportError>;

    /// Reacts to a message with a unicode emoji.
    ///
    /// # Returns
    /// - `Err(TransportError::PermissionDenied)` - The bot may not react here
    /// - `Err(TransportError::NotFound)` - The message no longer exists
    async fn add_marker(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), TransportError>;

    /// Waits for the first reaction on `message_id` accepted by `filter`.
    ///
    /// # Returns
    /// - `Some(MarkerEvent)` - A matching reaction arrived in time
    /// - `None` - `timeout` elapsed first
    async fn wait_for_marker(
        &self,
        message_id: MessageId,
        filter: MarkerFilter,
        timeout: Duration,
    ) -> Option<MarkerEvent>;
}
