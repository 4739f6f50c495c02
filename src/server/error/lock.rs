use thiserror::Error;

/// Errors reported by a lock backend.
#[derive(Error, Debug)]
pub enum LockError {
    /// Another holder owns an unexpired lock on the key.
    #[error("Lock on '{0}' is already held")]
    Contended(String),

    /// The handle no longer owns the key, either because it expired or because it
    /// was already released.
    #[error("Lock on '{0}' is not held by this handle")]
    NotHeld(String),

    /// The backend itself failed.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
