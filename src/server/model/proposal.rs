//! Proposal domain models.
//!
//! `ProposalParam` describes one proposal to run and `ConfirmationResult` is the single
//! terminal value a run produces.

use serenity::all::{ChannelId, User};
use std::time::Duration;

/// How long the target has to respond before a proposal times out.
pub const DEFAULT_PROPOSAL_TIMEOUT: Duration = Duration::from_secs(60);

/// Why a proposal was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The initiator withdrew their own request.
    CancelledByInitiator,
    /// The target said no.
    DeclinedByTarget,
}

/// Why a proposal ended without a response being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// None of the candidate markers could be attached to the prompt.
    MissingPermissions,
    /// The prompt was deleted before the markers were attached.
    PromptDeleted,
    /// The prompt could not be sent at all.
    PromptNotSent,
}

/// The terminal outcome of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    Confirmed,
    Denied(Denial),
    TimedOut,
    /// The target cannot confirm (e.g. a bot) and auto-confirmation was not allowed.
    NotApplicable,
    Aborted(AbortReason),
}

impl ConfirmationResult {
    /// Whether the proposed action should go ahead.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationResult::Confirmed)
    }
}

/// Parameters for running a single proposal.
pub struct ProposalParam<'a> {
    /// Channel the prompt and every notice are sent to.
    pub channel_id: ChannelId,
    /// User asking the question.
    pub initiator: &'a User,
    /// User being asked.
    pub target: &'a User,
    /// Prompt text, e.g. "Hey @target, do you want to adopt @initiator?"
    pub text: String,
    /// How long to wait for a response.
    pub timeout: Duration,
    /// Auto-confirm targets that cannot respond instead of reporting `NotApplicable`.
    pub allow_ineligible_target: bool,
    /// Replaces the default timeout notice.
    pub timeout_message: Option<String>,
    /// Replaces the default cancellation notice.
    pub cancel_message: Option<String>,
}

impl<'a> ProposalParam<'a> {
    /// Creates proposal parameters with the default timeout and notices.
    pub fn new(
        channel_id: ChannelId,
        initiator: &'a User,
        target: &'a User,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel_id,
            initiator,
            target,
            text: text.into(),
            timeout: DEFAULT_PROPOSAL_TIMEOUT,
            allow_ineligible_target: false,
            timeout_message: None,
            cancel_message: None,
        }
    }
}
