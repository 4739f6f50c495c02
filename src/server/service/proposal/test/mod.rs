use serenity::all::{ChannelId, MessageId, User, UserId};
use serenity::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_utils::serenity::create_test_user;
use tokio::sync::mpsc;

use crate::server::{
    error::{lock::LockError, proposal::ProposalError, transport::TransportError},
    model::{
        lock::LockHandle,
        marker::{Marker, MarkerEvent},
        proposal::{AbortReason, ConfirmationResult, Denial, ProposalParam},
    },
    service::proposal::{
        lock::{LockBackend, ProposalLockSet},
        memory::MemoryLockBackend,
        transport::{MarkerFilter, MentionPolicy, ProposalTransport},
        ProposalCoordinator,
    },
};


/// ID the mock assigns to the first message sent, i.e. the proposal prompt.
const PROMPT_ID: u64 = 1000;

const CHANNEL_ID: u64 = 500;

/// Generous wait for tests where the response is already queued.
const RESPONSE_WAIT: Duration = Duration::from_secs(5);

/// Short wait for tests expecting a timeout.
const SHORT_WAIT: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq)]
struct SentMessage {
    channel_id: ChannelId,
    content: String,
    mentions: MentionPolicy,
}

#[derive(Default)]
struct MockState {
    calls: usize,
    next_message_id: u64,
    sent: Vec<SentMessage>,
    edits: Vec<(MessageId, String)>,
    markers: Vec<(MessageId, String)>,
    forbidden: HashSet<String>,
    prompt_deleted: bool,
}

/// Scripted chat transport.
///
/// Reactions queued with `react` are delivered to `wait_for_marker` in order; with no
/// matching reaction the wait runs until its timeout.
struct MockTransport {
    state: Mutex<MockState>,
    reactions: mpsc::UnboundedSender<MarkerEvent>,
    incoming: tokio::sync::Mutex<mpsc::UnboundedReceiver<MarkerEvent>>,
}

impl MockTransport {
    fn new() -> Self {
        let (reactions, incoming) = mpsc::unbounded_channel();
        Self {
            state: Mutex::new(MockState {
                next_message_id: PROMPT_ID,
                ..Default::default()
            }),
            reactions,
            incoming: tokio::sync::Mutex::new(incoming),
        }
    }

    /// Refuses reactions with `emoji` as if the bot lacked permission.
    fn forbid(&self, emoji: &str) {
        self.state.lock().unwrap().forbidden.insert(emoji.to_string());
    }

    /// Refuses every marker candidate.
    fn forbid_all_markers(&self) {
        for marker in Marker::ALL {
            for emoji in marker.candidates() {
                self.forbid(emoji);
            }
        }
    }

    /// Makes every reaction attempt fail as if the prompt was deleted.
    fn delete_prompt(&self) {
        self.state.lock().unwrap().prompt_deleted = true;
    }

    /// Queues a reaction by `user_id` on message `message_id`.
    fn react(&self, message_id: u64, user_id: UserId, emoji: &str) {
        self.reactions
            .send(MarkerEvent {
                message_id: MessageId::new(message_id),
                user_id,
                emoji: emoji.to_string(),
            })
            .unwrap();
    }

    fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn sent(&self) -> Vec<SentMessage> {
        self.state.lock().unwrap().sent.clone()
    }

    /// Messages sent after the prompt.
    fn notices(&self) -> Vec<SentMessage> {
        self.sent().into_iter().skip(1).collect()
    }

    fn edits(&self) -> Vec<(MessageId, String)> {
        self.state.lock().unwrap().edits.clone()
    }

    fn markers(&self) -> Vec<(MessageId, String)> {
        self.state.lock().unwrap().markers.clone()
    }
}

#[async_trait]
impl ProposalTransport for MockTransport {
    async fn send(
        &self,
        channel_id: ChannelId,
        content: &str,
        mentions: MentionPolicy,
    ) -> Result<MessageId, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state.sent.push(SentMessage {
            channel_id,
            content: content.to_string(),
            mentions,
        });

        let message_id = MessageId::new(state.next_message_id);
        state.next_message_id += 1;

        Ok(message_id)
    }

    async fn edit(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state.edits.push((message_id, content.to_string()));
        Ok(())
    }

    async fn add_marker(
        &self,
        _channel_id: ChannelId,
        message_id: MessageId,
        emoji: &str,
    ) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;

        if state.prompt_deleted {
            return Err(TransportError::NotFound);
        }
        if state.forbidden.contains(emoji) {
            return Err(TransportError::PermissionDenied);
        }

        state.markers.push((message_id, emoji.to_string()));
        Ok(())
    }

    async fn wait_for_marker(
        &self,
        _message_id: MessageId,
        filter: MarkerFilter,
        timeout: Duration,
    ) -> Option<MarkerEvent> {
        self.state.lock().unwrap().calls += 1;

        let mut incoming = self.incoming.lock().await;
        tokio::time::timeout(timeout, async {
            while let Some(event) = incoming.recv().await {
                if filter(&event) {
                    return Some(event);
                }
            }
            None
        })
        .await
        .ok()
        .flatten()
    }
}

/// Lock backend whose acquisition fails for selected keys even though `is_locked`
/// reports them free, simulating a lost race after the pre-check.
#[derive(Default)]
struct RacingLockBackend {
    inner: MemoryLockBackend,
    contended: HashSet<String>,
    disconnects: Mutex<usize>,
}

impl RacingLockBackend {
    fn contended_on(key: &str) -> Self {
        Self {
            contended: HashSet::from([key.to_string()]),
            ..Default::default()
        }
    }

    fn disconnects(&self) -> usize {
        *self.disconnects.lock().unwrap()
    }
}

#[async_trait]
impl LockBackend for RacingLockBackend {
    async fn is_locked(&self, key: &str) -> bool {
        self.inner.is_locked(key).await
    }

    async fn lock(&self, key: &str, ttl: Duration) -> Result<LockHandle, LockError> {
        if self.contended.contains(key) {
            return Err(LockError::Contended(key.to_string()));
        }
        self.inner.lock(key, ttl).await
    }

    async fn unlock(&self, handle: &LockHandle) -> Result<(), LockError> {
        self.inner.unlock(handle).await
    }

    async fn disconnect(&self) {
        *self.disconnects.lock().unwrap() += 1;
    }
}

fn initiator() -> User {
    create_test_user(1, "U1", false)
}

fn target() -> User {
    create_test_user(2, "U2", false)
}

fn coordinator(locks: Arc<dyn LockBackend>, transport: Arc<MockTransport>) -> ProposalCoordinator {
    ProposalCoordinator::new(locks, transport)
}

fn channel() -> ChannelId {
    ChannelId::new(CHANNEL_ID)
}
