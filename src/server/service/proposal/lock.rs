//! Participant locks for proposals.
//!
//! A user may only take part in one proposal at a time. Before a proposal starts, the
//! caller acquires a `ProposalLockSet` covering every participant; the set is
//! all-or-nothing and must be released on every exit path.

use serenity::all::UserId;
use serenity::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    error::{lock::LockError, proposal::ProposalError},
    model::lock::{lock_key, LockHandle},
};

/// Lifetime of a participant lock if it is never released.
pub const LOCK_TTL: Duration = Duration::from_secs(120);

/// A backend providing exclusive, expiring locks on string keys.
///
/// Implementations must guarantee that at most one unexpired handle exists per key and
/// that releasing an expired or already released handle fails with
/// `LockError::NotHeld` rather than freeing someone else's lock.
#[async_trait]
pub trait LockBackend: Send + Sync {
    /// Reports whether `key` is currently held.
    ///
    /// Advisory only; `lock` is the source of truth.
    async fn is_locked(&self, key: &str) -> bool;

    /// Acquires `key` for `ttl`.
    async fn lock(&self, key: &str, ttl: Duration) -> Result<LockHandle, LockError>;

    /// Releases a held lock.
    async fn unlock(&self, handle: &LockHandle) -> Result<(), LockError>;

    /// Tears down the connection used for this attempt.
    async fn disconnect(&self);
}

/// The locks held for every participant of one proposal.
///
/// Dropping a set that still holds locks releases them on a background task, so an
/// early return or a panic cannot leave participants locked until expiry.
pub struct ProposalLockSet {
    backend: Arc<dyn LockBackend>,
    handles: Vec<LockHandle>,
}

impl ProposalLockSet {
    /// Locks every participant or none of them.
    ///
    /// Duplicate IDs are locked once. If any participant is already locked the call
    /// fails before touching the backend's lock path. If an individual acquisition then
    /// loses a race, everything acquired so far is released and the backend connection
    /// is torn down before reporting the failure.
    ///
    /// # Arguments
    /// - `backend` - Lock backend shared by every process running proposals
    /// - `participants` - Users taking part in the proposal
    ///
    /// # Returns
    /// - `Ok(ProposalLockSet)` - Every participant is now locked
    /// - `Err(ProposalError::ProposalInProgress)` - A participant is already locked
    /// - `Err(ProposalError::NoParticipants)` - `participants` was empty
    pub async fn acquire(
        backend: Arc<dyn LockBackend>,
        participants: &[UserId],
    ) -> Result<Self, ProposalError> {
        let mut keys: Vec<String> = Vec::with_capacity(participants.len());
        for key in participants.iter().copied().map(lock_key) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        if keys.is_empty() {
            return Err(ProposalError::NoParticipants);
        }

        for key in &keys {
            if backend.is_locked(key).await {
                tracing::debug!("User {} is already in a proposal", key);
                return Err(ProposalError::ProposalInProgress);
            }
        }

        let mut handles = Vec::with_capacity(keys.len());
        for key in &keys {
            match backend.lock(key, LOCK_TTL).await {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    tracing::debug!("Lost race acquiring proposal lock {}: {}", key, e);

                    release_handles(backend.as_ref(), handles).await;
                    backend.disconnect().await;

                    return Err(ProposalError::ProposalInProgress);
                }
            }
        }

        tracing::debug!("Acquired proposal locks for {:?}", keys);

        Ok(Self { backend, handles })
    }

    /// Releases every held lock.
    ///
    /// Locks that already expired or were released are skipped silently. Calling this
    /// again after a release does nothing beyond the optional disconnect.
    ///
    /// # Arguments
    /// - `disconnect` - Also tear down the backend connection
    pub async fn release(&mut self, disconnect: bool) {
        let handles = std::mem::take(&mut self.handles);
        release_handles(self.backend.as_ref(), handles).await;

        if disconnect {
            self.backend.disconnect().await;
        }
    }

    /// The handles currently held, in participant order.
    pub fn handles(&self) -> &[LockHandle] {
        &self.handles
    }

    /// Whether the set still holds any lock.
    pub fn is_held(&self) -> bool {
        !self.handles.is_empty()
    }
}

impl Drop for ProposalLockSet {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }

        let handles = std::mem::take(&mut self.handles);
        let backend = self.backend.clone();

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    release_handles(backend.as_ref(), handles).await;
                    backend.disconnect().await;
                });
            }
            Err(_) => {
                tracing::warn!(
                    "Dropped {} proposal locks outside of a runtime; they will expire on their own",
                    handles.len()
                );
            }
        }
    }
}

/// Unlocks each handle, swallowing already-expired and not-found errors.
async fn release_handles(backend: &dyn LockBackend, handles: Vec<LockHandle>) {
    for handle in handles {
        match backend.unlock(&handle).await {
            Ok(()) => tracing::debug!("Released proposal lock {}", handle.key),
            Err(LockError::NotHeld(key)) => {
                tracing::debug!("Proposal lock {} was already released or expired", key)
            }
            Err(e) => tracing::warn!("Failed to release proposal lock {}: {}", handle.key, e),
        }
    }
}
