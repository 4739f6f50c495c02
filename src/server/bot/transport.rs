//! Serenity implementation of the proposal transport.
//!
//! Messages are sent and edited through the bot's HTTP client; reactions are collected
//! from the gateway with a `ReactionCollector` on the shard that received the command.

use serenity::all::{
    ChannelId, Context, CreateMessage, EditMessage, Http, MessageId, Reaction, ReactionCollector,
    ReactionType, ShardMessenger,
};
use serenity::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    error::transport::TransportError,
    model::marker::MarkerEvent,
    service::proposal::transport::{MarkerFilter, MentionPolicy, ProposalTransport},
    util::mention::only_mention,
};

/// `ProposalTransport` backed by a live Discord connection.
#[derive(Clone)]
pub struct SerenityTransport {
    http: Arc<Http>,
    shard: ShardMessenger,
}

impl SerenityTransport {
    /// Creates a transport bound to the shard of an event's context.
    pub fn from_context(ctx: &Context) -> Self {
        Self {
            http: ctx.http.clone(),
            shard: ctx.shard.clone(),
        }
    }
}

#[async_trait]
impl ProposalTransport for SerenityTransport {
    async fn send(
        &self,
        channel_id: ChannelId,
        content: &str,
        mentions: MentionPolicy,
    ) -> Result<MessageId, TransportError> {
        let mut builder = CreateMessage::new().content(content);
        if let MentionPolicy::Only(user_id) = mentions {
            builder = builder.allowed_mentions(only_mention(user_id));
        }

        let message = channel_id
            .send_message(&self.http, builder)
            .await
            .map_err(classify)?;

        Ok(message.id)
    }

    async fn edit(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), TransportError> {
        let builder = EditMessage::new().content(content).embeds(Vec::new());

        channel_id
            .edit_message(&self.http, message_id, builder)
            .await
            .map_err(classify)?;

        Ok(())
    }

    async fn add_marker(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), TransportError> {
        self.http
            .create_reaction(
                channel_id,
                message_id,
                &ReactionType::Unicode(emoji.to_string()),
            )
            .await
            .map_err(classify)
    }

    async fn wait_for_marker(
        &self,
        message_id: MessageId,
        filter: MarkerFilter,
        timeout: Duration,
    ) -> Option<MarkerEvent> {
        let reaction = ReactionCollector::new(&self.shard)
            .message_id(message_id)
            .timeout(timeout)
            .filter(move |reaction| marker_event(reaction).is_some_and(|event| filter(&event)))
            .next()
            .await?;

        marker_event(&reaction)
    }
}

/// Converts a gateway reaction into a marker event.
///
/// Custom emoji and reactions without a known user are never markers.
fn marker_event(reaction: &Reaction) -> Option<MarkerEvent> {
    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return None;
    };

    Some(MarkerEvent {
        message_id: reaction.message_id,
        user_id: reaction.user_id?,
        emoji: emoji.clone(),
    })
}

/// Maps Discord's 403 and 404 responses onto the transport's recoverable errors.
fn classify(err: serenity::Error) -> TransportError {
    if let serenity::Error::Http(http_err) = &err {
        match http_err.status_code().map(|status| status.as_u16()) {
            Some(403) => return TransportError::PermissionDenied,
            Some(404) => return TransportError::NotFound,
            _ => {}
        }
    }

    TransportError::Discord(Box::new(err))
}
