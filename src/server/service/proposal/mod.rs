//! Proposal coordination.
//!
//! A proposal is one user (the initiator) asking another (the target) to agree to an
//! action by reacting to a prompt. This module serializes proposals per user through a
//! `LockBackend`, runs the prompt/response exchange through a `ProposalTransport`, and
//! resolves every run into a single `ConfirmationResult`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let coordinator = ProposalCoordinator::new(locks, transport);
//!
//! let result = coordinator
//!     .with_locks(&[author.id, target.id], async {
//!         coordinator
//!             .run_proposal(ProposalParam::new(channel_id, &author, &target, text))
//!             .await
//!     })
//!     .await?;
//! ```

pub mod confirmation;
pub mod lock;
pub mod memory;
pub mod transport;

#[cfg(test)]
mod test;

use serenity::all::{User, UserId};
use std::future::Future;
use std::sync::Arc;

use crate::server::error::proposal::ProposalError;

use self::{
    lock::{LockBackend, ProposalLockSet},
    transport::ProposalTransport,
};

/// Default eligibility policy: bots cannot genuinely confirm anything.
fn is_automated(user: &User) -> bool {
    user.bot
}

/// Runs proposals between users.
///
/// Cheap to construct; the bot builds one per interaction from the shared lock backend
/// and a transport bound to the interaction's shard.
pub struct ProposalCoordinator {
    locks: Arc<dyn LockBackend>,
    transport: Arc<dyn ProposalTransport>,
    /// Targets for which genuine confirmation is skipped.
    skip_confirmation: fn(&User) -> bool,
}

impl ProposalCoordinator {
    /// Creates a coordinator that treats bot accounts as ineligible targets.
    ///
    /// # Arguments
    /// - `locks` - Backend arbitrating which users are in a proposal
    /// - `transport` - Chat transport used to prompt and collect reactions
    pub fn new(locks: Arc<dyn LockBackend>, transport: Arc<dyn ProposalTransport>) -> Self {
        Self {
            locks,
            transport,
            skip_confirmation: is_automated,
        }
    }

    /// Replaces the eligibility predicate.
    pub fn with_eligibility(mut self, skip_confirmation: fn(&User) -> bool) -> Self {
        self.skip_confirmation = skip_confirmation;
        self
    }

    /// Locks every participant for the duration of a proposal.
    ///
    /// See `ProposalLockSet::acquire` for the all-or-nothing semantics.
    pub async fn acquire(&self, participants: &[UserId]) -> Result<ProposalLockSet, ProposalError> {
        ProposalLockSet::acquire(self.locks.clone(), participants).await
    }

    /// Releases a lock set. Never fails.
    pub async fn release(&self, lock_set: &mut ProposalLockSet, disconnect: bool) {
        lock_set.release(disconnect).await;
    }

    /// Runs `work` while holding locks on every participant.
    ///
    /// The locks are released and the backend connection torn down once `work`
    /// finishes. If `work` panics or this future is dropped, the lock set releases
    /// itself in the background.
    ///
    /// # Returns
    /// - `Ok(T)` - Output of `work`
    /// - `Err(ProposalError::ProposalInProgress)` - A participant was already locked;
    ///   `work` was not run
    pub async fn with_locks<F, T>(&self, participants: &[UserId], work: F) -> Result<T, ProposalError>
    where
        F: Future<Output = T>,
    {
        let mut lock_set = self.acquire(participants).await?;

        let output = work.await;

        lock_set.release(true).await;

        Ok(output)
    }
}
