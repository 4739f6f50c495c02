//! Confirmation markers.
//!
//! A marker is the reaction a participant places on a proposal prompt. Each kind has an
//! ordered list of candidate emojis; the bot attaches the first candidate it is allowed
//! to, and a reaction with any candidate counts as that kind.

use serenity::all::{MessageId, UserId};

/// Emojis representing a "yes", in attachment order.
const CONFIRM_EMOJIS: &[&str] = &["\u{2714}", "\u{2705}"];

/// Emojis representing a "no", in attachment order.
const DENY_EMOJIS: &[&str] = &["\u{2716}", "\u{274C}"];

/// Variation selector Discord appends to some emoji picked from its emoji picker.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// The two kinds of response a proposal accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Confirm,
    Deny,
}

impl Marker {
    /// Every marker kind in the order they are attached to a prompt.
    pub const ALL: [Marker; 2] = [Marker::Confirm, Marker::Deny];

    /// Candidate emojis for this marker, most preferred first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Marker::Confirm => CONFIRM_EMOJIS,
            Marker::Deny => DENY_EMOJIS,
        }
    }

    /// Resolves a reaction emoji to a marker kind.
    ///
    /// Trailing variation selectors are ignored so `✔️` and `✔` are the same marker.
    ///
    /// # Returns
    /// - `Some(Marker)` - The emoji is one of the candidates of that kind
    /// - `None` - The emoji is not a recognised marker
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        let emoji = emoji.trim_end_matches(VARIATION_SELECTOR);

        Self::ALL
            .into_iter()
            .find(|marker| marker.candidates().contains(&emoji))
    }
}

/// A reaction placed on a message, as observed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerEvent {
    pub message_id: MessageId,
    pub user_id: UserId,
    pub emoji: String,
}

impl MarkerEvent {
    /// The marker kind of this reaction, if it is one.
    pub fn marker(&self) -> Option<Marker> {
        Marker::from_emoji(&self.emoji)
    }
}
