//! Process-local lock backend.
//!
//! Holds locks in memory behind a `RwLock`. Suitable for a single bot process and for
//! tests; processes that share users need the database backend instead.

use chrono::{DateTime, Utc};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::server::{error::lock::LockError, model::lock::LockHandle};

use super::lock::LockBackend;

/// A held lock: the owner's token and when it lapses.
#[derive(Clone)]
struct HeldLock {
    token: String,
    expires_at: DateTime<Utc>,
}

impl HeldLock {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory `LockBackend`.
///
/// Clones share the same lock table.
#[derive(Clone, Default)]
pub struct MemoryLockBackend {
    locks: Arc<RwLock<HashMap<String, HeldLock>>>,
}

impl MemoryLockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LockBackend for MemoryLockBackend {
    async fn is_locked(&self, key: &str) -> bool {
        self.locks
            .read()
            .await
            .get(key)
            .is_some_and(|held| !held.is_expired())
    }

    async fn lock(&self, key: &str, ttl: Duration) -> Result<LockHandle, LockError> {
        let mut locks = self.locks.write().await;
        locks.retain(|_, held| !held.is_expired());

        if locks.contains_key(key) {
            return Err(LockError::Contended(key.to_string()));
        }

        let handle = LockHandle::new(key, ttl);
        locks.insert(
            key.to_string(),
            HeldLock {
                token: handle.token.clone(),
                expires_at: handle.expires_at,
            },
        );

        Ok(handle)
    }

    async fn unlock(&self, handle: &LockHandle) -> Result<(), LockError> {
        let mut locks = self.locks.write().await;

        let (owned, expired) = match locks.get(&handle.key) {
            Some(held) => (held.token == handle.token, held.is_expired()),
            None => (false, false),
        };

        if expired {
            // Expired leases are dead weight whoever owned them
            locks.remove(&handle.key);
        }

        if owned && !expired {
            locks.remove(&handle.key);
            Ok(())
        } else {
            Err(LockError::NotHeld(handle.key.clone()))
        }
    }

    async fn disconnect(&self) {}
}
