//! The prompt/response exchange of a proposal.
//!
//! Sends the prompt, attaches the confirm and deny markers, waits for a qualifying
//! reaction and reports the outcome back to the channel.

use serenity::all::{ChannelId, Mentionable, MessageId, User, UserId};

use crate::server::{
    error::transport::TransportError,
    model::{
        marker::{Marker, MarkerEvent},
        proposal::{AbortReason, ConfirmationResult, Denial, ProposalParam},
    },
};

use super::{
    transport::{MarkerFilter, MentionPolicy, ProposalTransport},
    ProposalCoordinator,
};

/// Replaces the prompt when no marker could be attached.
const MISSING_PERMISSIONS_MESSAGE: &str =
    "I need the `add_reactions` permission for me to be able to run this command.";

/// Outcome of attaching the markers to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MarkerAttachment {
    /// Every marker kind is on the prompt.
    Attached,
    /// Attaching failed for a reason other than permissions; users can still react.
    Incomplete,
    /// Every candidate of some marker kind was refused.
    MissingPermissions,
    /// The prompt disappeared.
    MessageGone,
}

/// Whichever of marker attachment and response collection finished first.
enum Race {
    Attached(MarkerAttachment),
    Responded(Option<MarkerEvent>),
}

impl ProposalCoordinator {
    /// Asks the target to confirm and waits for the answer.
    ///
    /// The target may answer with either marker; the initiator may withdraw with the
    /// deny marker. Any other reaction is ignored. Markers are attached while the wait
    /// is already running, so a reaction placed before the bot finishes attaching
    /// still counts.
    ///
    /// Every notice that mentions the initiator only allows the initiator to be pinged.
    ///
    /// # Returns
    /// - `Confirmed` - The target confirmed, or an ineligible target was auto-confirmed
    /// - `Denied(CancelledByInitiator)` - The initiator withdrew; a cancellation notice was sent
    /// - `Denied(DeclinedByTarget)` - The target said no; a notice was sent
    /// - `TimedOut` - Nobody answered in time; a timeout notice was sent
    /// - `NotApplicable` - The target is ineligible and auto-confirmation was not allowed
    /// - `Aborted(_)` - The prompt could not be sent, lost its markers' permissions or was deleted
    pub async fn run_proposal(&self, param: ProposalParam<'_>) -> ConfirmationResult {
        let ProposalParam {
            channel_id,
            initiator,
            target,
            text,
            timeout,
            allow_ineligible_target,
            timeout_message,
            cancel_message,
        } = param;

        if (self.skip_confirmation)(target) {
            return if allow_ineligible_target {
                ConfirmationResult::Confirmed
            } else {
                ConfirmationResult::NotApplicable
            };
        }

        let message_id = match self
            .transport
            .send(channel_id, &text, MentionPolicy::Default)
            .await
        {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::error!(
                    "Failed to send proposal prompt in channel {}: {}",
                    channel_id,
                    e
                );
                return ConfirmationResult::Aborted(AbortReason::PromptNotSent);
            }
        };

        let filter = response_filter(message_id, initiator.id, target.id);
        let wait = self.transport.wait_for_marker(message_id, filter, timeout);
        let attach = attach_markers(self.transport.as_ref(), channel_id, message_id);
        tokio::pin!(wait);
        tokio::pin!(attach);

        let race = tokio::select! {
            biased;
            attachment = &mut attach => Race::Attached(attachment),
            event = &mut wait => Race::Responded(event),
        };

        let response = match race {
            Race::Responded(event) => event,
            Race::Attached(MarkerAttachment::Attached | MarkerAttachment::Incomplete) => {
                wait.await
            }
            Race::Attached(MarkerAttachment::MissingPermissions) => {
                if let Err(e) = self
                    .transport
                    .edit(channel_id, message_id, MISSING_PERMISSIONS_MESSAGE)
                    .await
                {
                    tracing::warn!(
                        "Failed to explain missing reaction permissions on message {}: {}",
                        message_id,
                        e
                    );
                }
                return ConfirmationResult::Aborted(AbortReason::MissingPermissions);
            }
            Race::Attached(MarkerAttachment::MessageGone) => {
                tracing::debug!("Proposal prompt {} was deleted", message_id);
                return ConfirmationResult::Aborted(AbortReason::PromptDeleted);
            }
        };

        let Some(event) = response else {
            let notice = timeout_message.unwrap_or_else(|| {
                format!(
                    "Sorry, {}; your request to {} timed out - they didn't respond in time :<",
                    initiator.mention(),
                    target.mention()
                )
            });
            self.notify_initiator(channel_id, &notice, initiator).await;
            return ConfirmationResult::TimedOut;
        };

        if event.marker() == Some(Marker::Confirm) {
            return ConfirmationResult::Confirmed;
        }

        if event.user_id == initiator.id {
            let notice = cancel_message.unwrap_or_else(|| {
                format!(
                    "Alright, {}; your request to {} has been cancelled.",
                    initiator.mention(),
                    target.mention()
                )
            });
            self.notify_initiator(channel_id, &notice, initiator).await;
            return ConfirmationResult::Denied(Denial::CancelledByInitiator);
        }

        let notice = format!("Sorry, {}; they said no :<", initiator.mention());
        self.notify_initiator(channel_id, &notice, initiator).await;
        ConfirmationResult::Denied(Denial::DeclinedByTarget)
    }

    /// Sends a notice that may only ping the initiator. Failures are logged.
    async fn notify_initiator(&self, channel_id: ChannelId, content: &str, initiator: &User) {
        if let Err(e) = self
            .transport
            .send(channel_id, content, MentionPolicy::Only(initiator.id))
            .await
        {
            tracing::warn!("Failed to send proposal notice in channel {}: {}", channel_id, e);
        }
    }
}

/// Accepts any marker from the target and the deny marker from the initiator.
fn response_filter(message_id: MessageId, initiator: UserId, target: UserId) -> MarkerFilter {
    Box::new(move |event: &MarkerEvent| {
        if event.message_id != message_id {
            return false;
        }

        match event.marker() {
            Some(_) if event.user_id == target => true,
            Some(Marker::Deny) => event.user_id == initiator,
            _ => false,
        }
    })
}

/// Attaches one candidate of each marker kind, in order.
///
/// A refused candidate falls through to the next candidate of the same kind. The
/// attempt stops at the first kind whose candidates are all refused.
pub(super) async fn attach_markers(
    transport: &dyn ProposalTransport,
    channel_id: ChannelId,
    message_id: MessageId,
) -> MarkerAttachment {
    for marker in Marker::ALL {
        let mut attached = false;

        for emoji in marker.candidates() {
            match transport.add_marker(channel_id, message_id, emoji).await {
                Ok(()) => {
                    attached = true;
                    break;
                }
                Err(TransportError::PermissionDenied) => {
                    tracing::debug!(
                        "Not allowed to react with {} on message {}",
                        emoji,
                        message_id
                    );
                }
                Err(TransportError::NotFound) => return MarkerAttachment::MessageGone,
                Err(e) => {
                    tracing::warn!("Failed to react to message {}: {}", message_id, e);
                    return MarkerAttachment::Incomplete;
                }
            }
        }

        if !attached {
            return MarkerAttachment::MissingPermissions;
        }
    }

    MarkerAttachment::Attached
}
