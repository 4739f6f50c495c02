use super::*;

/// Tests acquiring a proposal lock set against the database backend.
///
/// Expected: both participants locked, then free after release
#[tokio::test]
async fn acquires_and_releases_lock_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let backend = Arc::new(DatabaseLockBackend::new(db));
    let mut lock_set =
        ProposalLockSet::acquire(backend.clone(), &[UserId::new(1), UserId::new(2)])
            .await
            .unwrap();

    assert!(backend.is_locked("1").await);
    assert!(backend.is_locked("2").await);

    lock_set.release(true).await;

    assert!(!backend.is_locked("1").await);
    assert!(!backend.is_locked("2").await);

    Ok(())
}

/// Tests that two backends sharing a database exclude each other.
///
/// Expected: second acquisition fails with ProposalInProgress and locks nothing new
#[tokio::test]
async fn excludes_across_backends() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let first = Arc::new(DatabaseLockBackend::new(db.clone()));
    let second = Arc::new(DatabaseLockBackend::new(db));

    let _held = ProposalLockSet::acquire(first, &[UserId::new(1)])
        .await
        .unwrap();
    let result =
        ProposalLockSet::acquire(second.clone(), &[UserId::new(2), UserId::new(1)]).await;

    assert_eq!(result.err(), Some(ProposalError::ProposalInProgress));
    assert!(!second.is_locked("2").await);

    Ok(())
}

/// Tests that locking a held key reports contention.
///
/// Expected: Err(LockError::Contended)
#[tokio::test]
async fn lock_reports_contention() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let backend = DatabaseLockBackend::new(db);
    backend.lock("1", TTL).await.unwrap();

    let result = backend.lock("1", TTL).await;

    assert!(matches!(result, Err(LockError::Contended(key)) if key == "1"));

    Ok(())
}

/// Tests that unlocking twice reports NotHeld the second time.
///
/// Expected: Ok then Err(LockError::NotHeld)
#[tokio::test]
async fn unlock_twice_reports_not_held() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lock_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let backend = DatabaseLockBackend::new(db);
    let handle = backend.lock("1", TTL).await.unwrap();

    assert!(backend.unlock(&handle).await.is_ok());
    assert!(matches!(
        backend.unlock(&handle).await,
        Err(LockError::NotHeld(_))
    ));

    Ok(())
}
