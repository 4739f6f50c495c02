use super::*;

/// Tests a key that was never locked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unknown_key_unlocked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);

    assert!(!repo.is_locked("1").await?);

    Ok(())
}

/// Tests that an expired row does not count as a lock.
///
/// Expected: Ok(false) while the stale row is still stored
#[tokio::test]
async fn reports_expired_lock_unlocked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProposalLockRepository::new(db);
    repo.insert(&LockHandle::new("1", Duration::ZERO)).await?;

    assert!(!repo.is_locked("1").await?);

    Ok(())
}
