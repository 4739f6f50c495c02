//! Lock handle domain model.
//!
//! A `LockHandle` is the proof of ownership returned by a lock backend. It records which
//! key was locked, the random token identifying this particular holder, and when the
//! lease lapses on its own if the holder never releases it.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serenity::all::UserId;
use std::time::Duration;

/// Length of the random ownership token.
const TOKEN_LENGTH: usize = 32;

/// Builds the lock key for a participant.
///
/// Keys are the decimal rendering of the Discord user ID so that every process sharing
/// a lock backend agrees on them.
pub fn lock_key(user_id: UserId) -> String {
    user_id.get().to_string()
}

/// A held, time-bounded claim on one lock key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockHandle {
    /// The locked key.
    pub key: String,
    /// Random token identifying this holder; required to release the lock.
    pub token: String,
    /// Instant after which the backend considers the lock free again.
    pub expires_at: DateTime<Utc>,
}

impl LockHandle {
    /// Creates a new handle for `key` with a fresh token, expiring `ttl` from now.
    ///
    /// # Arguments
    /// - `key` - The lock key being claimed
    /// - `ttl` - How long the claim remains valid without an explicit release
    ///
    /// # Returns
    /// - `LockHandle` - New handle; it is not held until a backend accepts it
    pub fn new(key: impl Into<String>, ttl: Duration) -> Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            key: key.into(),
            token: Self::generate_token(),
            expires_at,
        }
    }

    /// Checks whether the lease has lapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..TOKEN_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_key_is_decimal_user_id() {
        assert_eq!(lock_key(UserId::new(141231597155385344)), "141231597155385344");
    }

    /// Tests that two handles for the same key never share a token.
    ///
    /// Expected: distinct 32-character tokens
    #[test]
    fn handles_get_distinct_tokens() {
        let first = LockHandle::new("1", Duration::from_secs(120));
        let second = LockHandle::new("1", Duration::from_secs(120));

        assert_eq!(first.token.len(), TOKEN_LENGTH);
        assert_ne!(first.token, second.token);
    }

    /// Tests expiry against the configured time-to-live.
    ///
    /// Expected: a 120 second lease is live, a zero lease has already lapsed
    #[test]
    fn expiry_follows_ttl() {
        let live = LockHandle::new("1", Duration::from_secs(120));
        let lapsed = LockHandle::new("1", Duration::ZERO);

        assert!(!live.is_expired());
        assert!(lapsed.is_expired());
    }
}
