use super::*;

/// Tests deleting a lock with its own token.
///
/// Expected: Ok(true) and the key free afterwards
#[tokio::test]
async fn deletes_with_matching_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    let handle = LockHandle::new("1", TTL);
    repo.insert(&handle).await?;

    assert!(repo.delete("1", &handle.token).await?);
    assert!(!repo.is_locked("1").await?);

    Ok(())
}

/// Tests that another holder's token cannot delete the lock.
///
/// Expected: Ok(false) and the key still locked
#[tokio::test]
async fn ignores_foreign_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    repo.insert(&LockHandle::new("1", TTL)).await?;

    assert!(!repo.delete("1", "not-the-owner").await?);
    assert!(repo.is_locked("1").await?);

    Ok(())
}

/// Tests cleaning up expired locks.
///
/// Expected: only the expired row is removed
#[tokio::test]
async fn delete_expired_keeps_live_locks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    repo.insert(&LockHandle::new("1", Duration::ZERO)).await?;
    repo.insert(&LockHandle::new("2", TTL)).await?;

    assert_eq!(repo.delete_expired("1").await?, 1);
    assert_eq!(repo.delete_expired("2").await?, 0);
    assert!(repo.is_locked("2").await?);

    Ok(())
}
