//! Proposal lock data repository.
//!
//! This module provides the `ProposalLockRepository` for the `proposal_lock` table and
//! `DatabaseLockBackend`, the `LockBackend` implementation built on it. Every process
//! connected to the same database shares the same locks; the table's primary key is
//! what makes a lock exclusive.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use serenity::async_trait;
use std::time::Duration;

use crate::server::{
    error::lock::LockError, model::lock::LockHandle, service::proposal::lock::LockBackend,
};

/// Repository providing database operations for proposal locks.
pub struct ProposalLockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProposalLockRepository<'a> {
    /// Creates a new ProposalLockRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether an unexpired lock exists for `key`.
    ///
    /// # Returns
    /// - `Ok(true)` - The key is held
    /// - `Ok(false)` - The key is free or its lock expired
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_locked(&self, key: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ProposalLock::find()
            .filter(entity::proposal_lock::Column::LockKey.eq(key))
            .filter(entity::proposal_lock::Column::ExpiresAt.gt(Utc::now()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a lock row for the handle.
    ///
    /// An expired row for the same key is deleted first so a lock abandoned by a dead
    /// process does not block the key past its expiry.
    ///
    /// # Returns
    /// - `Ok(true)` - The lock was inserted and is now held by `handle`
    /// - `Ok(false)` - Another unexpired lock holds the key
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn insert(&self, handle: &LockHandle) -> Result<bool, DbErr> {
        self.delete_expired(&handle.key).await?;

        let result = entity::prelude::ProposalLock::insert(entity::proposal_lock::ActiveModel {
            lock_key: ActiveValue::Set(handle.key.clone()),
            token: ActiveValue::Set(handle.token.clone()),
            expires_at: ActiveValue::Set(handle.expires_at),
        })
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes the lock row for `key` if it is still owned by `token`.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was deleted
    /// - `Ok(false)` - No row for that key and token (released, expired and replaced, or never held)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, key: &str, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ProposalLock::delete_many()
            .filter(entity::proposal_lock::Column::LockKey.eq(key))
            .filter(entity::proposal_lock::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the lock row for `key` if it has expired.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self, key: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ProposalLock::delete_many()
            .filter(entity::proposal_lock::Column::LockKey.eq(key))
            .filter(entity::proposal_lock::Column::ExpiresAt.lte(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// `LockBackend` storing locks in the application database.
#[derive(Clone)]
pub struct DatabaseLockBackend {
    db: DatabaseConnection,
}

impl DatabaseLockBackend {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LockBackend for DatabaseLockBackend {
    async fn is_locked(&self, key: &str) -> bool {
        match ProposalLockRepository::new(&self.db).is_locked(key).await {
            Ok(locked) => locked,
            Err(e) => {
                // Acquisition still decides; the pre-check is only a shortcut
                tracing::error!("Failed to check proposal lock {}: {}", key, e);
                false
            }
        }
    }

    async fn lock(&self, key: &str, ttl: Duration) -> Result<LockHandle, LockError> {
        let handle = LockHandle::new(key, ttl);

        if ProposalLockRepository::new(&self.db).insert(&handle).await? {
            Ok(handle)
        } else {
            Err(LockError::Contended(key.to_string()))
        }
    }

    async fn unlock(&self, handle: &LockHandle) -> Result<(), LockError> {
        let deleted = ProposalLockRepository::new(&self.db)
            .delete(&handle.key, &handle.token)
            .await?;

        if deleted && !handle.is_expired() {
            Ok(())
        } else {
            Err(LockError::NotHeld(handle.key.clone()))
        }
    }

    async fn disconnect(&self) {
        // Pooled connections are returned after every query
        tracing::debug!("Released proposal lock connection");
    }
}
