use thiserror::Error;

/// Errors returned by a chat transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The bot lacks the permission required for the action (HTTP 403).
    #[error("Missing permissions for this action")]
    PermissionDenied,

    /// The target message or channel no longer exists (HTTP 404).
    #[error("Message or channel not found")]
    NotFound,

    /// Any other Discord API failure.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}
