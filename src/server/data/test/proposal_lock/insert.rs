use super::*;

/// Tests inserting a lock for a free key.
///
/// Expected: Ok(true) and the key reported as locked
#[tokio::test]
async fn inserts_lock_for_free_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    let inserted = repo.insert(&LockHandle::new("1", TTL)).await?;

    assert!(inserted);
    assert!(repo.is_locked("1").await?);

    Ok(())
}

/// Tests inserting a lock for a key that is already held.
///
/// Verifies that the unique constraint violation is reported as contention rather
/// than a database error, and the original holder keeps the key.
///
/// Expected: Ok(false) and the first token still stored
#[tokio::test]
async fn reports_contention_for_held_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    let first = LockHandle::new("1", TTL);
    repo.insert(&first).await?;

    let inserted = repo.insert(&LockHandle::new("1", TTL)).await?;

    assert!(!inserted);
    assert!(repo.delete("1", &first.token).await?);

    Ok(())
}

/// Tests that an expired lock is replaced on insert.
///
/// Expected: Ok(true) for the new handle once the old lease lapsed
#[tokio::test]
async fn replaces_expired_lock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    repo.insert(&LockHandle::new("1", Duration::ZERO)).await?;

    let replacement = LockHandle::new("1", TTL);
    let inserted = repo.insert(&replacement).await?;

    assert!(inserted);
    assert!(repo.delete("1", &replacement.token).await?);

    Ok(())
}
