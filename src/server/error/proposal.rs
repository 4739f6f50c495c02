use thiserror::Error;

/// Failures that the proposal coordinator lets reach its caller.
///
/// Everything else that can go wrong during a proposal (missing reaction permissions,
/// a deleted prompt, a timeout) resolves into a `ConfirmationResult` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalError {
    /// One of the participants is already part of a pending proposal.
    ///
    /// Surfaced to users as "you already have a pending request".
    #[error("A proposal involving one of these users is already in progress")]
    ProposalInProgress,

    /// A lock set was requested for nobody.
    #[error("A proposal needs at least one participant")]
    NoParticipants,
}
